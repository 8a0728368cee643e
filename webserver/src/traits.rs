//! Service trait definitions for dependency injection
//!
//! Navigation, timers, search and I/O are abstracted through these traits so
//! the homepage view can be tested without a browser or a running server.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;

use shared::{NavigationRequest, SessionId};
use crate::error::WebServerResult;
use crate::types::{ClientMessage, TimerHandle, TransitionTicket};

/// Navigation capability handed to the view at construction
#[mockall::automock]
pub trait Navigator: Send + Sync {
    /// Push a new history entry
    fn push(&self, request: NavigationRequest);
}

/// Deferred delivery of transition-elapsed events
#[mockall::automock]
pub trait TransitionScheduler: Send + Sync {
    /// Arrange for `ticket` to be reported once `delay` has passed
    fn schedule(&self, delay: Duration, ticket: TransitionTicket) -> TimerHandle;
}

/// Search over the enterprise directory
#[mockall::automock]
pub trait SearchIndex: Send + Sync {
    /// Ids of matching enterprises, best match first
    fn search(&self, query: &str) -> Vec<String>;

    /// Number of indexed enterprises
    fn len(&self) -> usize;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Serve static file
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse>;
}

/// Live session bookkeeping
#[mockall::automock]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Register a session and its outgoing channel
    async fn add_session(&self, session_id: SessionId, sender: mpsc::Sender<ClientMessage>) -> WebServerResult<()>;

    /// Forget a session
    async fn remove_session(&self, session_id: SessionId) -> WebServerResult<()>;

    /// Send a message to one session
    async fn send_to_session(&self, session_id: SessionId, message: ClientMessage) -> WebServerResult<()>;

    /// Get count of active sessions
    async fn session_count(&self) -> usize;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    /// Create new static file response
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
