//! Type definitions for webserver
//!
//! Messages exchanged with the browser, events consumed by a live session,
//! and the timer handle returned by transition schedulers.

use serde::{Deserialize, Serialize};
use shared::{NavigationRequest, QueryParams};

/// WebSocket messages from the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowserMessage {
    /// The search form was submitted
    Submit { text: String },
    /// The browser moved through its history; `search` is `location.search`
    Navigate { search: String },
}

/// WebSocket messages to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Replace the contents of `.homepage-component`
    Render { html: String },
    /// Push a history entry without reloading
    Navigate {
        pathname: String,
        query: QueryParams,
        href: String,
    },
    Error { message: String },
}

impl ClientMessage {
    pub fn navigate(request: &NavigationRequest) -> Self {
        Self::Navigate {
            pathname: request.pathname.clone(),
            query: request.query.clone(),
            href: request.href(),
        }
    }
}

/// Identifies one scheduled exit transition; stale tickets are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket(pub u64);

/// Everything a live homepage session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Browser(BrowserMessage),
    TransitionElapsed(TransitionTicket),
}

/// Handle to a scheduled timer. Dropping it cancels the timer.
#[derive(Debug, Default)]
pub struct TimerHandle {
    abort: Option<tokio::task::AbortHandle>,
}

impl TimerHandle {
    pub fn new(abort: tokio::task::AbortHandle) -> Self {
        Self { abort: Some(abort) }
    }

    /// A handle with nothing behind it, for schedulers that fire manually
    pub fn detached() -> Self {
        Self { abort: None }
    }

}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_message_wire_format() {
        let submit: BrowserMessage =
            serde_json::from_str(r#"{"type":"submit","text":"bakery"}"#).unwrap();
        assert_eq!(submit, BrowserMessage::Submit { text: "bakery".to_string() });

        let navigate: BrowserMessage =
            serde_json::from_str(r#"{"type":"navigate","search":""}"#).unwrap();
        assert_eq!(navigate, BrowserMessage::Navigate { search: String::new() });
    }

    #[test]
    fn test_navigate_message_carries_href() {
        let message = ClientMessage::navigate(&NavigationRequest::search("bakery"));
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "navigate",
                "pathname": "/",
                "query": {"q": "bakery"},
                "href": "/?q=bakery"
            })
        );
    }

    #[tokio::test]
    async fn test_dropping_timer_handle_aborts_task() {
        let task = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        let handle = TimerHandle::new(task.abort_handle());
        drop(handle);

        let result = task.await;
        assert!(result.unwrap_err().is_cancelled());
    }
}
