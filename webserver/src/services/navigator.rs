//! Navigation queued for the live session
//!
//! A push lands on an unbounded queue that the session drains before its next
//! render, turning each request into a `ClientMessage::Navigate`. The browser
//! script applies it with `history.pushState`.

use tokio::sync::mpsc;

use shared::{ComponentId, NavigationRequest, SessionId, component_debug};
use crate::traits::Navigator;

#[derive(Clone)]
pub struct ChannelNavigator {
    session_id: SessionId,
    pushes: mpsc::UnboundedSender<NavigationRequest>,
}

impl ChannelNavigator {
    pub fn new(session_id: SessionId, pushes: mpsc::UnboundedSender<NavigationRequest>) -> Self {
        Self { session_id, pushes }
    }
}

impl Navigator for ChannelNavigator {
    fn push(&self, request: NavigationRequest) {
        let component = ComponentId::Session(self.session_id);
        component_debug!(component, "🧭 Navigating to {}", request.href());

        if let Err(mpsc::error::SendError(request)) = self.pushes.send(request) {
            component_debug!(component, "Navigation to {} after session ended", request.href());
        }
    }
}
