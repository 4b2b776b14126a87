//! Error types for the command-line front end
//!
//! Parsing itself never fails; these cover reading inputs and writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScssDocError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("skipping '{}': {size} bytes exceeds the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid size '{value}': {reason}")]
    InvalidSize { value: String, reason: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for front-end operations
pub type Result<T> = std::result::Result<T, ScssDocError>;
