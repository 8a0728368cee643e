//! Data passed between the server, its views and the browser
//!
//! - `navigation`: locations, query parameters and history pushes
//! - `directory`: enterprise listings
//! - `config`: site configuration handed to views

pub mod config;
pub mod directory;
pub mod navigation;

pub use config::SiteConfig;
pub use directory::{Directory, Enterprise};
pub use navigation::{Location, NavigationRequest, QueryParams, SEARCH_PARAM};
