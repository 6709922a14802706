//! Error types for the mailboxlayer client.

use crate::ApiError;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// The three variants stay distinct so callers can tell "the service rejected
/// the request" apart from "we could not talk to the service".
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A response arrived but its body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status and an error body.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns the service-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// `true` when the service itself rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}
