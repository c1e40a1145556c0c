//! Error types for pokedex-core.

use thiserror::Error;

/// Errors that can occur while fetching records from the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Locator could not be parsed or uses an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Transport-level failure (DNS, connection, CORS, ...)
    #[error("Request failed: {0}")]
    Request(String),
    /// Server answered with a non-success status other than 404
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    /// Record does not exist (HTTP 404 or identity out of range)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
