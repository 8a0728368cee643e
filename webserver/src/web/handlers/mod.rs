//! Axum handlers

pub mod api;
pub mod homepage;
pub mod static_files;
pub mod websocket;
