//! Webserver state shared by all handlers

use std::sync::Arc;
use std::time::Instant;

use crate::core::HomepageProps;
use crate::traits::{SessionRegistry, StaticFileServer};

/// Router state: the homepage collaborators plus injected services
pub struct AppState<S, R>
where
    S: StaticFileServer,
    R: SessionRegistry,
{
    pub props: HomepageProps,
    pub static_server: Arc<S>,
    pub session_registry: Arc<R>,
    pub started_at: Instant,
}

impl<S, R> AppState<S, R>
where
    S: StaticFileServer,
    R: SessionRegistry,
{
    pub fn new(props: HomepageProps, static_server: S, session_registry: R) -> Self {
        Self {
            props,
            static_server: Arc::new(static_server),
            session_registry: Arc::new(session_registry),
            started_at: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// S and R sit behind Arc and need not be Clone themselves
impl<S, R> Clone for AppState<S, R>
where
    S: StaticFileServer,
    R: SessionRegistry,
{
    fn clone(&self) -> Self {
        Self {
            props: self.props.clone(),
            static_server: self.static_server.clone(),
            session_registry: self.session_registry.clone(),
            started_at: self.started_at,
        }
    }
}
