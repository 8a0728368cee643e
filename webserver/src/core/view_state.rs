//! Homepage view state
//!
//! Pure business logic with no I/O dependencies. The state changes only
//! through `initialize`, `on_submit` and `on_external_navigation`.

use serde::{Deserialize, Serialize};
use shared::{Location, NavigationRequest};

use crate::traits::Navigator;

/// What the homepage shows, derived from the query state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Intro,
    Results,
}

/// Query state of one mounted homepage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active search text. `None` means no search is active.
    pub query_text: Option<String>,
    /// The active text came from the URL when the view mounted
    pub is_direct: bool,
}

impl ViewState {
    /// Read the initial state from the URL
    pub fn initialize(location: &Location) -> Self {
        match location.query.search_text() {
            Some(q) if !q.is_empty() => Self {
                query_text: Some(q.to_string()),
                is_direct: true,
            },
            _ => Self::default(),
        }
    }

    /// React to a navigation reported by the surrounding context
    ///
    /// Only the bare URL (empty search string) resets the view; any other
    /// search string is left alone. Returns whether the state changed.
    pub fn on_external_navigation(&mut self, location: &Location) -> bool {
        if !location.search.is_empty() {
            return false;
        }
        let reset = Self::default();
        if *self == reset {
            return false;
        }
        *self = reset;
        true
    }

    /// Apply a form submission and push the matching URL
    ///
    /// The text is taken as-is, including an empty string.
    pub fn on_submit(&mut self, text: &str, navigator: &dyn Navigator) {
        self.query_text = Some(text.to_string());
        self.is_direct = false;
        navigator.push(NavigationRequest::search(text));
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.query_text.is_some() {
            DisplayMode::Results
        } else {
            DisplayMode::Intro
        }
    }

    pub fn query_text(&self) -> &str {
        self.query_text.as_deref().unwrap_or_default()
    }
}
