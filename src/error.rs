//! Errors of the plugin layer. The segmentation functions themselves are
//! total and never fail.

use thiserror::Error;

/// Result type for plugin requests
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The text argument was not UTF-8
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The request argument could not be parsed
    #[error("malformed request: {0}")]
    Request(#[source] serde_json::Error),

    /// The response could not be serialized
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}
