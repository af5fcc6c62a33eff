//! Prompt fetch error types.

use thiserror::Error;

/// Prompt fetch failure variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error while fetching prompt: {message}")]
    Network { message: String },

    #[error("prompt endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed prompt response: {message}")]
    MalformedBody { message: String },

    #[error("unexpected prompt fetch error: {message}")]
    Unexpected { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates non-success status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates malformed body error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error came from the transport.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
