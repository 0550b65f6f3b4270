//! Error types for the service API client.

use thiserror::Error;

/// Failures reported by the API client.
///
/// Everything here is terminal for the current call; retries are the
/// caller's decision.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection, TLS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    BadResponse(String),

    /// A base64 payload field failed to decode
    #[error("failed to decode dataset data: {0}")]
    Decode(#[from] base64::DecodeError),
}
