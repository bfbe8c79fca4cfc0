//! Error types for the hungr-core library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hungr operations
#[derive(Error, Debug)]
pub enum HungrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for hungr operations
pub type Result<T> = std::result::Result<T, HungrError>;

impl HungrError {
    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        HungrError::Json {
            path: path.into(),
            source,
        }
    }
}

impl PartialEq for HungrError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            HungrError::Io(err) => {
                matches!(other, HungrError::Io(e) if err.to_string() == e.to_string())
            }
            HungrError::Json { path, source } => {
                matches!(other, HungrError::Json { path: p, source: s } if path == p && source.to_string() == s.to_string())
            }
            HungrError::NotFound(path) => {
                matches!(other, HungrError::NotFound(p) if path == p)
            }
            HungrError::Configuration(msg) => {
                matches!(other, HungrError::Configuration(o) if msg == o)
            }
        }
    }
}
