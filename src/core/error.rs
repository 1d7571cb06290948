//! Error types for the logging core
//!
//! These surface only at the sink boundary. Public log calls never return
//! errors; write failures are swallowed so logging cannot become a new
//! failure source for business logic.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from the sink writer
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Sink error (generic)
    #[error("Sink error: {0}")]
    SinkError(String),
}

impl LoggerError {
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::SinkError(msg.into())
    }
}
