use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for mathelf
#[derive(Debug, Error)]
pub enum MathElfError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid server URL '{0}'")]
    InvalidServerUrl(String),

    #[error("Failed to start network worker: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
