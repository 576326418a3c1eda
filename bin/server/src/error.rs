//! Domain error types for server operations.
//!
//! Backend error details stay in server logs; server functions answer the
//! browser with a fixed user-safe message.

use std::fmt;

/// Errors talking to the marketplace backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The HTTP client could not be constructed.
    ClientBuild { details: String },
    /// The request could not be sent or timed out.
    Request { details: String },
    /// The backend answered with a non-success status.
    Status { status: u16 },
    /// The response body was not what the endpoint promises.
    Decode { details: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { details } => {
                write!(f, "failed to build backend client: {}", details)
            }
            Self::Request { details } => write!(f, "backend request failed: {}", details),
            Self::Status { status } => write!(f, "backend returned status {}", status),
            Self::Decode { details } => {
                write!(f, "failed to decode backend response: {}", details)
            }
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = BackendError::Status { status: 503 };
        assert_eq!(err.to_string(), "backend returned status 503");
    }
}
