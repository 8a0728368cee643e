//! Server-rendered homepage
//!
//! A plain GET renders what a freshly mounted view shows for the URL, so
//! direct links to `/?q=...` work without the live session.

use axum::extract::{RawQuery, State};
use maud::Markup;

use shared::{ComponentId, Location, component_debug};

use crate::core::render_initial;
use crate::state::AppState;
use crate::traits::{SessionRegistry, StaticFileServer};
use crate::web::views::{homepage, layout::title_for, page};

pub async fn serve_homepage<S, R>(
    State(state): State<AppState<S, R>>,
    RawQuery(raw_query): RawQuery,
) -> Markup
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    let location = Location::from_parts("/", raw_query.as_deref().unwrap_or_default());
    let render = render_initial(&location, &state.props);
    component_debug!(ComponentId::WebServer, "📄 Rendering homepage for {}", location.href());

    let title = title_for(render.results.as_ref().map(|r| r.search_text.as_str()));
    page(&title, state.props.transition.as_millis(), homepage(&render))
}
