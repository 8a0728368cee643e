//! Tests for the SessionRegistry service

use crate::services::RealSessionRegistry;
use crate::traits::SessionRegistry;
use crate::types::ClientMessage;
use shared::SessionId;
use tokio::sync::mpsc;

mod real_session_registry_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_remove_sessions() {
        let registry = RealSessionRegistry::new();
        assert_eq!(registry.session_count().await, 0);

        let (tx, _rx) = mpsc::channel(8);
        let session_id = SessionId::new();
        registry.add_session(session_id, tx).await.unwrap();

        assert_eq!(registry.session_count().await, 1);

        registry.remove_session(session_id).await.unwrap();
        assert_eq!(registry.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_remove_unknown_session_is_ok() {
        let registry = RealSessionRegistry::new();
        assert!(registry.remove_session(SessionId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_to_session_delivers() {
        let registry = RealSessionRegistry::new();
        let (tx, mut rx) = mpsc::channel(8);
        let session_id = SessionId::new();
        registry.add_session(session_id, tx).await.unwrap();

        let message = ClientMessage::Error { message: "bad request".to_string() };
        registry.send_to_session(session_id, message.clone()).await.unwrap();

        assert_eq!(rx.recv().await, Some(message));
    }

    #[tokio::test]
    async fn test_send_to_unknown_session_fails() {
        let registry = RealSessionRegistry::new();
        let message = ClientMessage::Error { message: "x".to_string() };
        assert!(registry.send_to_session(SessionId::new(), message).await.is_err());
    }

    #[tokio::test]
    async fn test_send_to_closed_session_removes_it() {
        let registry = RealSessionRegistry::new();
        let (tx, rx) = mpsc::channel(8);
        let session_id = SessionId::new();
        registry.add_session(session_id, tx).await.unwrap();
        drop(rx);

        let message = ClientMessage::Error { message: "x".to_string() };
        assert!(registry.send_to_session(session_id, message).await.is_err());
        assert_eq!(registry.session_count().await, 0);
    }
}
