//! Error types for the diff crate.
//!
//! Diffing itself is total; these errors only arise while loading or
//! rendering a [`DiffConfig`](crate::DiffConfig).

use std::path::PathBuf;

/// Errors that can occur around diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The configuration file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`DiffConfig`](crate::DiffConfig).
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
