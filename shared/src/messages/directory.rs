//! Social enterprise listing data
//!
//! The directory is a JSON array of enterprises loaded once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::{SharedError, SharedResult};

/// One listed social enterprise
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Enterprise {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Logo file name under `/images/logos/`
    pub logo: String,
    pub website: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Enterprise {
    pub fn logo_src(&self) -> String {
        format!("/images/logos/{}", self.logo)
    }

    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.title)
    }
}

/// The full listing, in file order
///
/// Deserializes from a JSON array through `Directory::new`, so ids are unique
/// whichever way it is built.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<Enterprise>", into = "Vec<Enterprise>")]
pub struct Directory {
    enterprises: Vec<Enterprise>,
}

impl TryFrom<Vec<Enterprise>> for Directory {
    type Error = SharedError;

    fn try_from(enterprises: Vec<Enterprise>) -> SharedResult<Self> {
        Self::new(enterprises)
    }
}

impl From<Directory> for Vec<Enterprise> {
    fn from(directory: Directory) -> Self {
        directory.enterprises
    }
}

impl Directory {
    /// Build a directory, rejecting duplicate ids
    pub fn new(enterprises: Vec<Enterprise>) -> SharedResult<Self> {
        let mut seen = HashSet::new();
        for enterprise in &enterprises {
            if !seen.insert(enterprise.id.as_str()) {
                return Err(SharedError::DuplicateEnterprise {
                    id: enterprise.id.clone(),
                });
            }
        }
        Ok(Self { enterprises })
    }

    pub fn from_json(json: &str, source: &str) -> SharedResult<Self> {
        let enterprises: Vec<Enterprise> =
            serde_json::from_str(json).map_err(|e| SharedError::DirectoryParse {
                path: source.to_string(),
                source: e,
            })?;
        Self::new(enterprises)
    }

    /// Load a directory from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SharedResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| SharedError::DirectoryRead {
            path: display.clone(),
            source: e,
        })?;
        Self::from_json(&json, &display)
    }

    pub fn enterprises(&self) -> &[Enterprise] {
        &self.enterprises
    }

    pub fn get(&self, id: &str) -> Option<&Enterprise> {
        self.enterprises.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.enterprises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enterprises.is_empty()
    }
}
