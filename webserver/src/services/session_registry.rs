//! Live session registry
//!
//! Tracks the outgoing channel of every connected homepage session

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tokio::sync::mpsc::error::TrySendError;

use shared::{ComponentId, SessionId, component_info, component_warn};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::SessionRegistry;
use crate::types::ClientMessage;

#[derive(Debug)]
struct SessionEntry {
    sender: mpsc::Sender<ClientMessage>,
    connected_at: DateTime<Utc>,
}

/// Real session registry implementation
#[derive(Clone, Default)]
pub struct RealSessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
}

impl RealSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for RealSessionRegistry {
    async fn add_session(&self, session_id: SessionId, sender: mpsc::Sender<ClientMessage>) -> WebServerResult<()> {
        let entry = SessionEntry {
            sender,
            connected_at: Utc::now(),
        };
        self.sessions.write().await.insert(session_id, entry);

        component_info!(ComponentId::Session(session_id), "👋 Session registered");
        Ok(())
    }

    async fn remove_session(&self, session_id: SessionId) -> WebServerResult<()> {
        if let Some(entry) = self.sessions.write().await.remove(&session_id) {
            let connected_for = Utc::now() - entry.connected_at;
            component_info!(
                ComponentId::Session(session_id),
                "👋 Session removed after {}s",
                connected_for.num_seconds()
            );
        }
        Ok(())
    }

    async fn send_to_session(&self, session_id: SessionId, message: ClientMessage) -> WebServerResult<()> {
        let sender = {
            let sessions = self.sessions.read().await;
            sessions
                .get(&session_id)
                .map(|entry| entry.sender.clone())
                .ok_or_else(|| WebServerError::SessionNotFound(session_id.to_string()))?
        };

        match sender.try_send(message) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                component_warn!(ComponentId::Session(session_id), "Session channel full, dropping message");
                Err(WebServerError::websocket(format!("Channel full for session {session_id}")))
            }
            Err(TrySendError::Closed(_)) => {
                self.sessions.write().await.remove(&session_id);
                Err(WebServerError::websocket(format!("Session {session_id} disconnected")))
            }
        }
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
