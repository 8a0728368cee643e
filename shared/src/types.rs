//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a live homepage session (one per browser tab)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex characters, used in log lines
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component a log line originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// HTTP server and router
    WebServer,
    /// Listing data and search index
    Directory,
    /// A live homepage session
    Session(SessionId),
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::WebServer => write!(f, "webserver"),
            ComponentId::Directory => write!(f, "directory"),
            ComponentId::Session(id) => write!(f, "session_{}", id.short()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_component_display() {
        let id = SessionId::new();
        assert_eq!(ComponentId::WebServer.to_string(), "webserver");
        assert_eq!(ComponentId::Directory.to_string(), "directory");

        let session = ComponentId::Session(id).to_string();
        assert!(session.starts_with("session_"));
        assert_eq!(session.len(), "session_".len() + 8);
    }
}
