//! Tokio-backed transition scheduler
//!
//! Each scheduled transition is a spawned sleep that posts
//! `SessionEvent::TransitionElapsed` back into the owning session's queue.
//! The scheduler only holds a weak sender so it never keeps a finished
//! session's queue open.

use std::time::Duration;
use tokio::sync::mpsc;

use shared::{ComponentId, SessionId, component_debug};
use crate::traits::TransitionScheduler;
use crate::types::{SessionEvent, TimerHandle, TransitionTicket};

#[derive(Clone)]
pub struct TokioTransitionScheduler {
    session_id: SessionId,
    events: mpsc::WeakSender<SessionEvent>,
}

impl TokioTransitionScheduler {
    pub fn new(session_id: SessionId, events: &mpsc::Sender<SessionEvent>) -> Self {
        Self {
            session_id,
            events: events.downgrade(),
        }
    }
}

impl TransitionScheduler for TokioTransitionScheduler {
    fn schedule(&self, delay: Duration, ticket: TransitionTicket) -> TimerHandle {
        let events = self.events.clone();
        let component = ComponentId::Session(self.session_id);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let delivered = match events.upgrade() {
                Some(events) => events.send(SessionEvent::TransitionElapsed(ticket)).await.is_ok(),
                None => false,
            };
            if !delivered {
                component_debug!(component, "Transition {:?} elapsed after session closed", ticket);
            }
        });

        TimerHandle::new(task.abort_handle())
    }
}
