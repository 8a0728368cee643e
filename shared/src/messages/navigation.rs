//! Navigation types shared by the view and transport layers
//!
//! A `Location` mirrors what a browser exposes: the path, the raw search
//! string (with its leading `?`, or empty) and the decoded query mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Name of the query parameter carrying the search text
pub const SEARCH_PARAM: &str = "q";

/// Decoded query parameters. Repeated keys keep their first value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut params = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self(params)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `q` field, if present
    pub fn search_text(&self) -> Option<&str> {
        self.get(SEARCH_PARAM)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `a=1&b=2` (no leading `?`)
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// Current navigation location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Raw search string, `""` or `"?..."`
    pub search: String,
    pub query: QueryParams,
}

impl Location {
    /// The bare root URL, `/`
    pub fn root() -> Self {
        Self::from_parts("/", "")
    }

    /// Build from a path and a raw search string
    pub fn from_parts(pathname: &str, search: &str) -> Self {
        let trimmed = search.strip_prefix('?').unwrap_or(search);
        let search = if trimmed.is_empty() {
            String::new()
        } else {
            format!("?{trimmed}")
        };
        let pathname = if pathname.is_empty() { "/" } else { pathname };

        Self {
            pathname: pathname.to_string(),
            query: QueryParams::parse(&search),
            search,
        }
    }

    /// Parse a relative href such as `/?q=ottawa#top`
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.split_once('?') {
            Some((path, search)) => Self::from_parts(path, search),
            None => Self::from_parts(href, ""),
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

/// A request to push a new entry onto the navigation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub pathname: String,
    pub query: QueryParams,
}

impl NavigationRequest {
    /// `{pathname: "/", query: {q: text}}`
    pub fn search(text: &str) -> Self {
        Self {
            pathname: "/".to_string(),
            query: QueryParams::new().with(SEARCH_PARAM, text),
        }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query.encode())
        }
    }
}
