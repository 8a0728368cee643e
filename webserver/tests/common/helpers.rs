//! Test helper utilities for webserver integration tests

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use scraper::{Html, Selector};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tower::ServiceExt;

use webserver::{ClientMessage, RealSessionRegistry, RealStaticFileServer, WebServer};

use super::fixtures::create_test_props;

pub type TestServer = WebServer<RealStaticFileServer, RealSessionRegistry>;

pub fn create_test_server(static_dir: &Path) -> TestServer {
    WebServer::new(
        create_test_props(),
        RealStaticFileServer::new(static_dir),
        RealSessionRegistry::new(),
    )
}

/// Issue a GET against the router
pub async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get_ok(router: &Router, uri: &str) -> String {
    let response = get(router, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_string(response).await
}

/// Number of elements matching `selector`
pub fn count(document: &Html, selector: &str) -> usize {
    let selector = Selector::parse(selector).unwrap();
    document.select(&selector).count()
}

/// Value of `attribute` on the first element matching `selector`
pub fn attr(document: &Html, selector: &str, attribute: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attribute))
        .map(str::to_string)
}

/// Parse a `render` payload as it lands inside `.homepage-component`
pub fn parse_render(html: &str) -> Html {
    Html::parse_fragment(&format!("<div class=\"homepage-component\">{html}</div>"))
}

/// Next message from a session, failing the test after `within`
pub async fn next_message(rx: &mut mpsc::Receiver<ClientMessage>, within: Duration) -> ClientMessage {
    tokio::time::timeout(within, rx.recv())
        .await
        .expect("timed out waiting for session message")
        .expect("session outgoing channel closed")
}

/// Next message, which must be a render
pub async fn next_render(rx: &mut mpsc::Receiver<ClientMessage>, within: Duration) -> Html {
    match next_message(rx, within).await {
        ClientMessage::Render { html } => parse_render(&html),
        other => panic!("expected render, got {other:?}"),
    }
}

/// Helper to wait for async conditions with timeout
pub async fn wait_for_condition<F, Fut>(mut condition: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    loop {
        if condition().await {
            return true;
        }

        if start.elapsed() > timeout {
            return false;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
