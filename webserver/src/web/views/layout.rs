//! Page shell shared by every server-rendered page

use maud::{DOCTYPE, Markup, html};

pub const SITE_TITLE: &str = "Ottawa Social Enterprise Directory";

/// Full HTML document around `body`
pub fn page(title: &str, transition_ms: u128, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/styles.css";
            }
            body data-transition-ms=(transition_ms.to_string()) style=(transition_style(transition_ms)) {
                main #app { (body) }
                script src="/static/homepage.js" defer {}
            }
        }
    }
}

/// Exposes the exit duration to the stylesheet as `--intro-exit`
fn transition_style(transition_ms: u128) -> String {
    format!("--intro-exit: {transition_ms}ms")
}

/// Document title for a search
pub fn title_for(search_text: Option<&str>) -> String {
    match search_text {
        Some(text) if !text.is_empty() => format!("{text} · {SITE_TITLE}"),
        _ => SITE_TITLE.to_string(),
    }
}
