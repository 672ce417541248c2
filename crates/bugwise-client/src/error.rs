//! Request failure type for the analysis service

use bugwise_core::ErrorKind;
use thiserror::Error;

/// Why a single request to the analysis service did not produce a value.
///
/// Keeps transport failures and HTTP rejections apart so logs and tests can
/// tell them apart; [`SubmitError::kind`] folds both into
/// [`ErrorKind::RequestFailed`] for anything user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Connection refused, DNS failure, reset, timeout, ...
    #[error("network error: {message}")]
    Network { message: String },

    /// Server answered with a non-2xx status
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    /// 2xx response whose body was not the expected JSON shape
    #[error("malformed response body: {message}")]
    MalformedResponse { message: String },
}

impl SubmitError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Coarse classification shown to the rest of the application
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Network { .. } | SubmitError::Http { .. } => ErrorKind::RequestFailed,
            SubmitError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
