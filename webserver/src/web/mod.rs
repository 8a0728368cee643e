//! HTTP and WebSocket surface
//!
//! - `views`: maud templates for the homepage and its children
//! - `session`: the live homepage behind one WebSocket
//! - `handlers`: axum handlers

pub mod handlers;
pub mod session;
pub mod views;

pub use session::HomepageSession;
