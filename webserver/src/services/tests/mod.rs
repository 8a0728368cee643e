//! Service tests for webserver
//!
//! This module contains tests for the webserver service implementations.

pub mod session_registry;
