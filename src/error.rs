//! Error types for the Nimbus client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Pagination input problems (`Validation`, `InvalidCursor`,
//! `CursorTypeMismatch`) are always raised before a network call is issued.
//! Executor failures (`Http`, `HttpStatus`) are propagated as-is and never
//! reinterpreted by the pagination layer.

use crate::types::PaginationType;
use thiserror::Error;

/// The main error type for the Nimbus client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// Invalid pagination input (non-positive sizes, jump on a
    /// token-paginated resource, cursor combined with a jump)
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Cursor value could not be decoded
    #[error("Invalid pagination cursor: {message}")]
    InvalidCursor {
        /// Why decoding failed
        message: String,
    },

    /// Decoded cursor belongs to the other paging style
    #[error("Cursor type mismatch: expected {expected} pagination, got {actual}")]
    CursorTypeMismatch {
        /// Paging style the resource is configured with
        expected: PaginationType,
        /// Paging style found in the cursor
        actual: PaginationType,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport-level failure from the request executor
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the backend
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Malformed base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Errors
    // ============================================================================
    /// Response body or item failed to parse
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else
    #[error("{0}")]
    Other(String),

    /// Wrapped error from a caller-supplied component
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            message: message.into(),
        }
    }

    /// Create a cursor type mismatch error
    pub fn type_mismatch(expected: PaginationType, actual: PaginationType) -> Self {
        Self::CursorTypeMismatch { expected, actual }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error was raised by pagination input validation,
    /// i.e. before any network traffic
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. }
                | Error::InvalidCursor { .. }
                | Error::CursorTypeMismatch { .. }
        )
    }
}

/// Result type alias for the Nimbus client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("pageSize must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Validation error: pageSize must be greater than zero"
        );

        let err = Error::invalid_cursor("not valid base64");
        assert_eq!(
            err.to_string(),
            "Invalid pagination cursor: not valid base64"
        );

        let err = Error::type_mismatch(PaginationType::Offset, PaginationType::Token);
        assert_eq!(
            err.to_string(),
            "Cursor type mismatch: expected offset pagination, got token"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::validation("bad input").is_validation());
        assert!(Error::invalid_cursor("garbled").is_validation());
        assert!(
            Error::type_mismatch(PaginationType::Token, PaginationType::Offset).is_validation()
        );

        assert!(!Error::http_status(500, "").is_validation());
        assert!(!Error::Other("misc".to_string()).is_validation());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::validation("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Validation error: inner"));
    }
}
