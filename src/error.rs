use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Component;

/// Unified error type for bump-pkg operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid version format: '{0}' - expected X.Y.Z[-prerelease]")]
    InvalidFormat(String),

    #[error("Invalid {component} version: '{text}'")]
    InvalidComponent { component: Component, text: String },

    #[error("Cannot bump {component} version: {value} is the largest supported value")]
    Overflow { component: Component, value: u64 },

    #[error("Invalid bump kind: '{0}' - expected major, minor or patch")]
    InvalidBumpKind(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in bump-pkg
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// True when the error was caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, BumpError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
