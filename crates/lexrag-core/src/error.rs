//! Error type for the core crate.

use thiserror::Error;

/// Errors produced by core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid PII pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("duplicate document id: {0}")]
    DuplicateId(String),

    #[error("document source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("answer generation failed in '{generator}': {message}")]
    Generation { generator: String, message: String },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any displayable failure as a [`Error::Source`] error.
    pub fn from_source(source_name: &str, err: impl std::fmt::Display) -> Self {
        Error::Source {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
