//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstall-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstall-client errors (separate crate)                              │
//! │  └── ClientError      - Transport, storage, and API failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → UI notification     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (book id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain-level failures. They should be caught and
/// translated to user-friendly messages before reaching the UI.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary string from the API could not be parsed.
    ///
    /// ## When This Occurs
    /// - A book price is not a decimal string ("9.99")
    /// - More than two fraction digits are present
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any network call is made.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Two fields that must match do not.
    #[error("{field} does not match {other}")]
    Mismatch {
        field: &'static str,
        other: &'static str,
    },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPrice("abc".to_string());
        assert_eq!(err.to_string(), "Invalid price: abc");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "username" };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::TooShort {
            field: "password",
            min: 8,
        };
        assert_eq!(err.to_string(), "password must be at least 8 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "username" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
