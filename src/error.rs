//! Registry errors.
//!
//! Rendering never fails; only loading a section registry can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Registry`](crate::registry::Registry).
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("section #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
