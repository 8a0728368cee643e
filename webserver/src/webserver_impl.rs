//! Main webserver implementation
//!
//! The WebServer owns the router state and wires services into axum handlers
//! through dependency injection.

use axum::{Router, routing::get};
use std::future::Future;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::{ComponentId, component_info, logging};

use crate::core::HomepageProps;
use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::traits::{SessionRegistry, StaticFileServer};
use crate::web::handlers::{api, homepage, static_files, websocket};

/// Main webserver struct with dependency injection
pub struct WebServer<S, R>
where
    S: StaticFileServer,
    R: SessionRegistry,
{
    state: AppState<S, R>,
}

impl<S, R> WebServer<S, R>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    pub fn new(props: HomepageProps, static_server: S, session_registry: R) -> Self {
        Self {
            state: AppState::new(props, static_server, session_registry),
        }
    }

    pub fn state(&self) -> &AppState<S, R> {
        &self.state
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let api_routes = Router::new()
            .route("/enterprises", get(api::list_enterprises::<S, R>))
            .route("/search", get(api::search_enterprises::<S, R>));

        Router::new()
            .route("/", get(homepage::serve_homepage::<S, R>))
            .route("/ws", get(websocket::websocket_handler::<S, R>))
            .route("/static/*path", get(static_files::serve_static::<S, R>))
            .route("/images/*path", get(static_files::serve_image::<S, R>))
            .route("/health", get(api::health_check::<S, R>))
            .nest("/api/v1", api_routes)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Serve until ctrl-c
    pub async fn run(&self, bind_address: SocketAddr) -> WebServerResult<()> {
        self.run_until(bind_address, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain open connections
    pub async fn run_until<F>(&self, bind_address: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        component_info!(ComponentId::WebServer, "🌐 Web server listening on http://{}", bind_address);
        component_info!(
            ComponentId::WebServer,
            "📚 Directory of {} enterprises available at http://{}/",
            self.state.props.directory.len(),
            bind_address
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::http(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(&ComponentId::WebServer, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(&ComponentId::WebServer, "Signal handling", &err),
    }
}
