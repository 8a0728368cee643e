//! Webserver library for the social enterprise directory
//!
//! Serves the server-rendered homepage and runs one live homepage session per
//! WebSocket so searches and history navigation update the page in place.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{Navigator, SearchIndex, SessionRegistry, StaticFileServer, TransitionScheduler};

// Re-export service implementations
pub use services::{
    ChannelNavigator, KeywordSearchIndex, RealSessionRegistry, RealStaticFileServer, TokioTransitionScheduler,
};
