//! Error types for the kach-core library.

use thiserror::Error;

/// Main error type for the kach library.
#[derive(Error, Debug)]
pub enum KachError {
    /// Forwarding error.
    #[error("forward error: {0}")]
    Forward(#[from] ForwardError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single forward attempt.
///
/// These never escape the dispatch task into the pipeline; they are logged
/// there and surface only through the task's join handle.
#[derive(Error, Debug)]
pub enum ForwardError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}

/// Result type for the kach library.
pub type Result<T> = std::result::Result<T, KachError>;
