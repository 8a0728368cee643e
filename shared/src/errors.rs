//! Shared error types for the directory front-end

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Failed to read directory file {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse directory file {path}: {source}")]
    DirectoryParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate enterprise id in directory: {id}")]
    DuplicateEnterprise { id: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
