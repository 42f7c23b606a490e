//! Error types for the stats pipeline

use fbref_scraper::ScrapeError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The standard stats table could not be fetched or parsed
    #[error("Failed to fetch standard stats: {0}")]
    PrimaryUnavailable(#[source] ScrapeError),

    /// The standard stats table had no player rows
    #[error("Standard stats table from {url} contained no players")]
    EmptyPrimary { url: String },

    /// I/O errors while persisting the document
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
