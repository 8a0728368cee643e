//! Shared types for the social enterprise directory
//!
//! Listing data, navigation types, site configuration, errors and logging
//! helpers used by the webserver and its tests.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Navigation
    Location, NavigationRequest, QueryParams, SEARCH_PARAM,

    // Listing data
    Directory, Enterprise,

    // Configuration
    SiteConfig,
};
