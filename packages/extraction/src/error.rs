//! Typed errors for the extraction core.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors produced by a model backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend is not reachable or not configured
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The call exceeded the configured timeout
    #[error("backend call timed out")]
    Timeout,

    /// Response body could not be interpreted
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No API credentials configured
    #[error("missing credentials")]
    MissingCredentials,
}

/// Errors internal to the extraction core.
///
/// [`ExtractionPipeline::extract`](crate::ExtractionPipeline::extract) is
/// total and never surfaces these to the caller; they exist for the fallible
/// seams underneath it.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Model backend failed
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Timezone name is not a known IANA identifier
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for model backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;
