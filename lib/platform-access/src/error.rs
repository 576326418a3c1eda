//! Error types for the platform-access crate.
//!
//! Errors are designed for layered context using rootcause. The shell
//! collapses every `SessionError` into "no user", so these exist for
//! logging and for provider implementations to report what went wrong.

use std::fmt;

/// Errors from session provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The caller has no session (no token, or the backend rejected it).
    Unauthenticated,
    /// Fetching the current user failed.
    FetchFailed { reason: String },
    /// The backend answered with a payload that is not a user record.
    InvalidResponse { reason: String },
    /// Ending the session could not be initiated.
    LogoutFailed { reason: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => {
                write!(f, "no authenticated session")
            }
            Self::FetchFailed { reason } => {
                write!(f, "failed to fetch current user: {reason}")
            }
            Self::InvalidResponse { reason } => {
                write!(f, "invalid current user response: {reason}")
            }
            Self::LogoutFailed { reason } => {
                write!(f, "logout failed: {reason}")
            }
        }
    }
}

impl std::error::Error for SessionError {}
