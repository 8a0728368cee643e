//! Site configuration passed down to views

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Configuration values the homepage forwards to the results panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root of the listing API, always ending in `/`
    pub api_root: String,
}

impl SiteConfig {
    pub const DEFAULT_API_ROOT: &'static str = "/api/v1/";

    /// Validate and normalise an API root
    pub fn new(api_root: &str) -> SharedResult<Self> {
        let api_root = api_root.trim();
        let is_absolute_path = api_root.starts_with('/');
        let is_url = api_root.starts_with("http://") || api_root.starts_with("https://");
        if !is_absolute_path && !is_url {
            return Err(SharedError::InvalidConfig {
                field: "api_root".to_string(),
                value: api_root.to_string(),
            });
        }

        let api_root = if api_root.ends_with('/') {
            api_root.to_string()
        } else {
            format!("{api_root}/")
        };
        Ok(Self { api_root })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_root: Self::DEFAULT_API_ROOT.to_string(),
        }
    }
}
