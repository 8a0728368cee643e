//! Static file serving handlers
//!
//! Serve frontend assets and enterprise logos with proper caching and content types

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};

use crate::state::AppState;
use crate::traits::{SessionRegistry, StaticFileServer};

/// Serve files under /static/
pub async fn serve_static<S, R>(
    Path(path): Path<String>,
    State(state): State<AppState<S, R>>,
) -> Result<Response, StatusCode>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    respond_with_file(state.static_server.as_ref(), &path).await
}

/// Serve files under /images/ from the static directory's images folder
pub async fn serve_image<S, R>(
    Path(path): Path<String>,
    State(state): State<AppState<S, R>>,
) -> Result<Response, StatusCode>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    respond_with_file(state.static_server.as_ref(), &format!("images/{path}")).await
}

async fn respond_with_file<S>(static_server: &S, path: &str) -> Result<Response, StatusCode>
where
    S: StaticFileServer,
{
    let file_response = static_server
        .serve_file(path)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file_response.content_type);

    if let Some(cache_control) = file_response.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }

    response
        .body(file_response.content.into())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
