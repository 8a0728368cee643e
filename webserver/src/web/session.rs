//! Live homepage session
//!
//! One `HomepageSession` runs per WebSocket. It owns the mounted view and
//! applies events one at a time: browser messages from the socket reader and
//! transition-elapsed events from the scheduler. Every event that changes
//! what the homepage shows is answered with a `render` message.

use std::sync::Arc;
use tokio::sync::mpsc;

use shared::{ComponentId, Location, NavigationRequest, SessionId, component_debug, component_info};

use crate::core::{HomepageProps, HomepageView};
use crate::error::{WebServerError, WebServerResult};
use crate::services::{ChannelNavigator, TokioTransitionScheduler};
use crate::types::{BrowserMessage, ClientMessage, SessionEvent};
use crate::web::views::homepage_contents;

pub struct HomepageSession {
    id: SessionId,
    view: HomepageView,
    events: mpsc::Receiver<SessionEvent>,
    navigations: mpsc::UnboundedReceiver<NavigationRequest>,
    outgoing: mpsc::Sender<ClientMessage>,
}

impl HomepageSession {
    /// Mount a homepage at `location`
    ///
    /// `event_tx` must be the sender paired with `events`; the scheduler keeps
    /// only a weak handle to it, so the session ends once every strong sender
    /// is dropped.
    pub fn new(
        id: SessionId,
        location: &Location,
        props: HomepageProps,
        event_tx: &mpsc::Sender<SessionEvent>,
        events: mpsc::Receiver<SessionEvent>,
        outgoing: mpsc::Sender<ClientMessage>,
    ) -> Self {
        let (push_tx, navigations) = mpsc::unbounded_channel();
        let navigator = Arc::new(ChannelNavigator::new(id, push_tx));
        let scheduler = Arc::new(TokioTransitionScheduler::new(id, event_tx));
        let view = HomepageView::mount(location, props, navigator, scheduler);

        Self {
            id,
            view,
            events,
            navigations,
            outgoing,
        }
    }

    /// Process events until the event queue closes
    pub async fn run(mut self) -> WebServerResult<()> {
        let component = ComponentId::Session(self.id);
        component_info!(component, "🏠 Homepage mounted ({:?})", self.view.display_mode());

        self.send_render().await?;

        while let Some(event) = self.events.recv().await {
            if self.apply(event) {
                self.send_render().await?;
            }
        }

        component_info!(component, "🏁 Homepage unmounted");
        Ok(())
    }

    /// Apply one event. Returns whether a re-render is needed.
    fn apply(&mut self, event: SessionEvent) -> bool {
        let component = ComponentId::Session(self.id);

        match event {
            SessionEvent::Browser(BrowserMessage::Submit { text }) => {
                component_info!(component, "🔍 Search submitted: {:?}", text);
                self.view.submit(&text);
                true
            }
            SessionEvent::Browser(BrowserMessage::Navigate { search }) => {
                let location = Location::from_parts("/", &search);
                let changed = self.view.receive_location(&location);
                component_debug!(component, "🧭 External navigation to {:?} (changed: {})", location.href(), changed);
                changed
            }
            SessionEvent::TransitionElapsed(ticket) => {
                let changed = self.view.transition_elapsed(ticket);
                component_debug!(component, "⏱️ Transition {:?} elapsed (applied: {})", ticket, changed);
                changed
            }
        }
    }

    /// Queued navigations go out before the render that follows them
    async fn send_render(&mut self) -> WebServerResult<()> {
        while let Ok(request) = self.navigations.try_recv() {
            self.send(ClientMessage::navigate(&request)).await?;
        }
        let html = homepage_contents(&self.view.render()).into_string();
        self.send(ClientMessage::Render { html }).await
    }

    async fn send(&self, message: ClientMessage) -> WebServerResult<()> {
        self.outgoing
            .send(message)
            .await
            .map_err(|_| WebServerError::websocket(format!("Session {} outgoing channel closed", self.id)))
    }
}
