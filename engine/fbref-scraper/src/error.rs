//! Error types for page fetching and table extraction

use thiserror::Error;

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while fetching a statistics page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failures, timeouts and unreadable bodies
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP request to {url} failed with status: {status}")]
    Status { url: String, status: reqwest::StatusCode },

    /// The page contained no tables at all
    #[error("No tables found at {url}")]
    NoTables { url: String },

    /// A CSS selector failed to compile
    #[error("Selector error: {0}")]
    Selector(String),

    /// The HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl ScrapeError {
    /// Create a new selector error
    pub fn selector(msg: impl Into<String>) -> Self {
        Self::Selector(msg.into())
    }

    /// Create a new no-tables error for a URL
    pub fn no_tables(url: impl Into<String>) -> Self {
        Self::NoTables { url: url.into() }
    }
}
