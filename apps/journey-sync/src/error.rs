//! Remote API errors.

use journey_core::JourneyError;
use thiserror::Error;

/// Errors from talking to the GraphQL endpoint or saving what it returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any response other than 200.
    #[error("{operation} returned HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    /// Body did not match the query's selection set.
    #[error("{operation} returned an unexpected payload: {detail}")]
    Shape {
        operation: &'static str,
        detail: String,
    },

    /// Well-formed response with nothing in it.
    #[error("{operation} returned no data{detail}")]
    EmptyPayload {
        operation: &'static str,
        detail: String,
    },

    /// Local storage failure.
    #[error(transparent)]
    Journey(#[from] JourneyError),
}

impl ApiError {
    /// Whether the failure came from the remote side rather than local files.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Journey(_))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Journey(JourneyError::Io(e))
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
