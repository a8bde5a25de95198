//! Error types for log fetching and filter-file handling.

use thiserror::Error;

/// Errors that can occur while loading a filter file or listing log entries.
#[derive(Error, Debug)]
pub enum PodlogError {
    /// Reading the filter file failed.
    #[error("failed to read filter file: {0}")]
    FilterIo(#[from] std::io::Error),

    /// The HTTP request could not be sent or its body could not be decoded.
    #[error("log API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The log API answered with a non-success status.
    /// `message` carries the response body for diagnosis.
    #[error("log API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// A response body was not valid JSON for the expected shape.
    #[error("malformed log API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias used throughout podlog-core.
pub type Result<T> = std::result::Result<T, PodlogError>;
