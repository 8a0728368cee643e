//! REST API handlers
//!
//! JSON endpoints under the API root, plus the health check

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use shared::{Directory, Enterprise};

use crate::state::AppState;
use crate::traits::{SessionRegistry, StaticFileServer};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<Enterprise>,
}

/// Full listing - /api/v1/enterprises
pub async fn list_enterprises<S, R>(State(state): State<AppState<S, R>>) -> Json<Directory>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    Json(state.props.directory.as_ref().clone())
}

/// Matching listings - /api/v1/search?q=
pub async fn search_enterprises<S, R>(
    State(state): State<AppState<S, R>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    let results: Vec<Enterprise> = state
        .props
        .index
        .search(&params.q)
        .iter()
        .filter_map(|id| state.props.directory.get(id).cloned())
        .collect();

    Json(SearchResponse {
        query: params.q,
        total: results.len(),
        results,
    })
}

/// Health check endpoint
pub async fn health_check<S, R>(State(state): State<AppState<S, R>>) -> Json<Value>
where
    S: StaticFileServer + 'static,
    R: SessionRegistry + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime_seconds": state.uptime_seconds(),
        "active_sessions": state.session_registry.session_count().await,
        "enterprises": state.props.directory.len(),
        "indexed": state.props.index.len(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
