//! Shared error type across AuthMap crates.

use thiserror::Error;

/// Stable error codes exposed in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed configuration or input.
    BadRequest,
    /// A policy that can never be satisfied (empty required role).
    InvalidPolicy,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidPolicy => "INVALID_POLICY",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AuthMapError>;

/// Unified error type used by core and gateway.
///
/// Access denials are not errors; they are returned as
/// [`AccessDecision::Denied`](crate::AccessDecision::Denied).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthMapError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl AuthMapError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthMapError::BadRequest(_) => ErrorCode::BadRequest,
            AuthMapError::InvalidPolicy(_) => ErrorCode::InvalidPolicy,
            AuthMapError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            AuthMapError::Internal(_) => ErrorCode::Internal,
        }
    }
}
