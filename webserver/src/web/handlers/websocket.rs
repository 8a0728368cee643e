//! WebSocket connection handler
//!
//! Each connection mounts its own homepage session at the browser's location
//! and bridges socket frames to session events.

use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use shared::{ComponentId, Location, SessionId, component_debug, component_error, component_info, component_warn};

use crate::state::AppState;
use crate::traits::{SessionRegistry, StaticFileServer};
use crate::types::{BrowserMessage, ClientMessage, SessionEvent};
use crate::web::session::HomepageSession;

const OUTGOING_BUFFER: usize = 100;
const EVENT_BUFFER: usize = 64;

/// `/ws?search=<location.search>`
#[derive(Debug, Default, Deserialize)]
pub struct SessionParams {
    #[serde(default)]
    pub search: String,
}

pub async fn websocket_handler<S, R>(
    ws: WebSocketUpgrade,
    Query(params): Query<SessionParams>,
    State(state): State<AppState<S, R>>,
) -> Response
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    let location = Location::from_parts("/", &params.search);
    ws.on_upgrade(move |socket| handle_websocket(socket, location, state))
}

async fn handle_websocket<S, R>(socket: WebSocket, location: Location, state: AppState<S, R>)
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    let session_id = SessionId::new();
    let component = ComponentId::Session(session_id);
    component_info!(component, "🔗 New WebSocket connection at {}", location.href());

    let (mut sender, mut receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<ClientMessage>(OUTGOING_BUFFER);
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(EVENT_BUFFER);

    if let Err(e) = state.session_registry.add_session(session_id, out_tx.clone()).await {
        component_error!(component, "Failed to register session: {}", e);
        return;
    }

    let session = HomepageSession::new(
        session_id,
        &location,
        state.props.clone(),
        &event_tx,
        event_rx,
        out_tx,
    );
    let session_task = tokio::spawn(session.run());

    let outgoing_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            let json_msg = match serde_json::to_string(&msg) {
                Ok(json) => json,
                Err(e) => {
                    component_error!(component, "Failed to serialize client message: {}", e);
                    continue;
                }
            };

            if let Err(e) = sender.send(Message::Text(json_msg)).await {
                component_warn!(component, "Failed to send message: {}", e);
                break;
            }
        }

        component_debug!(component, "Outgoing message task ended");
    });

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                component_warn!(component, "WebSocket error: {}", e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                component_debug!(component, "📨 Received: {}", text);

                match serde_json::from_str::<BrowserMessage>(&text) {
                    Ok(message) => {
                        if event_tx.send(SessionEvent::Browser(message)).await.is_err() {
                            component_warn!(component, "Session ended, closing connection");
                            break;
                        }
                    }
                    Err(e) => {
                        component_warn!(component, "Failed to parse browser message: {}", e);
                        let error_msg = ClientMessage::Error {
                            message: format!("Failed to parse request: {e}"),
                        };
                        if let Err(e) = state.session_registry.send_to_session(session_id, error_msg).await {
                            component_error!(component, "Failed to send error message: {}", e);
                        }
                    }
                }
            }
            Message::Binary(_) => {
                component_warn!(component, "Received binary message - not supported");
            }
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => {
                component_info!(component, "Browser requested close");
                break;
            }
        }
    }

    // Closing the event queue unmounts the session
    drop(event_tx);
    match session_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            component_warn!(component, "Session ended with error: {}", e);
        }
        Err(e) => {
            component_error!(component, "Session task failed: {}", e);
        }
    }
    outgoing_task.abort();

    if let Err(e) = state.session_registry.remove_session(session_id).await {
        component_error!(component, "Failed to remove session: {}", e);
    }

    component_info!(component, "👋 WebSocket connection closed");
}
