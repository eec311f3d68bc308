use thiserror::Error;

/// Failure of a single request against the club API.
///
/// Callers only distinguish success from failure; the variants exist for
/// the log line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}
