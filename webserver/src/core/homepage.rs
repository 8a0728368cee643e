//! Homepage view
//!
//! Owns the view state and the intro transition for one mounted homepage and
//! produces a framework-free description of what to render. HTML generation
//! lives in `web::views`.

use std::sync::Arc;
use std::time::Duration;

use shared::{Directory, Enterprise, Location, SiteConfig};

use crate::core::transition::{IntroPresence, IntroTransition};
use crate::core::view_state::{DisplayMode, ViewState};
use crate::traits::{Navigator, SearchIndex, TransitionScheduler};
use crate::types::TransitionTicket;

/// Externally supplied collaborators the homepage passes to its children
#[derive(Clone)]
pub struct HomepageProps {
    pub directory: Arc<Directory>,
    pub index: Arc<dyn SearchIndex>,
    pub config: SiteConfig,
    pub transition: Duration,
}

/// Search widget inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormRender {
    pub search_text: String,
}

/// Intro block inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroRender {
    pub leaving: bool,
}

/// Results panel inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsRender {
    pub search_text: String,
    pub direct_search: bool,
    pub api_root: String,
    pub hits: Vec<Enterprise>,
}

/// Everything the homepage renders for its current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageRender {
    pub search_form: SearchFormRender,
    pub intro: Option<IntroRender>,
    /// Powered-by, chat and project-credit blocks
    pub show_info_blocks: bool,
    pub results: Option<ResultsRender>,
}

pub struct HomepageView {
    state: ViewState,
    intro: IntroTransition,
    props: HomepageProps,
    navigator: Arc<dyn Navigator>,
    scheduler: Arc<dyn TransitionScheduler>,
}

impl HomepageView {
    /// Mount the view at `location`
    pub fn mount(
        location: &Location,
        props: HomepageProps,
        navigator: Arc<dyn Navigator>,
        scheduler: Arc<dyn TransitionScheduler>,
    ) -> Self {
        let state = ViewState::initialize(location);
        let intro = IntroTransition::new(state.display_mode(), props.transition);
        Self {
            state,
            intro,
            props,
            navigator,
            scheduler,
        }
    }

    /// Search form submitted
    pub fn submit(&mut self, text: &str) {
        self.state.on_submit(text, self.navigator.as_ref());
        self.sync_intro();
    }

    /// The surrounding navigation reported a new location
    pub fn receive_location(&mut self, location: &Location) -> bool {
        if !self.state.on_external_navigation(location) {
            return false;
        }
        self.sync_intro();
        true
    }

    /// Scheduler reported that an exit transition finished
    pub fn transition_elapsed(&mut self, ticket: TransitionTicket) -> bool {
        self.intro.complete(ticket)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode()
    }

    pub fn intro_presence(&self) -> IntroPresence {
        self.intro.presence()
    }

    pub fn render(&self) -> HomepageRender {
        render_view(&self.state, self.intro.presence(), &self.props)
    }

    fn sync_intro(&mut self) {
        let mode = self.state.display_mode();
        self.intro.sync(mode, self.scheduler.as_ref());
    }
}

/// Render what a freshly mounted view at `location` shows
///
/// Used for one-shot HTTP responses where no submit can happen.
pub fn render_initial(location: &Location, props: &HomepageProps) -> HomepageRender {
    let state = ViewState::initialize(location);
    render_view(&state, IntroPresence::at_mount(state.display_mode()), props)
}

fn render_view(state: &ViewState, presence: IntroPresence, props: &HomepageProps) -> HomepageRender {
    let search_form = SearchFormRender {
        search_text: state.query_text().to_string(),
    };

    let intro = match presence {
        IntroPresence::Shown => Some(IntroRender { leaving: false }),
        IntroPresence::Leaving => Some(IntroRender { leaving: true }),
        IntroPresence::Removed => None,
    };

    let results = state.query_text.as_ref().map(|text| ResultsRender {
        search_text: text.clone(),
        direct_search: state.is_direct,
        api_root: props.config.api_root.clone(),
        hits: search(props, text),
    });

    HomepageRender {
        search_form,
        intro,
        show_info_blocks: state.display_mode() == DisplayMode::Intro,
        results,
    }
}

fn search(props: &HomepageProps, text: &str) -> Vec<Enterprise> {
    props
        .index
        .search(text)
        .iter()
        .filter_map(|id| props.directory.get(id).cloned())
        .collect()
}
