//! # Client Error Types
//!
//! Error types for everything that can fail outside bookstall-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Network / API  │  │    Storage      │  │     Pre-flight          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Api {status}   │  │  Storage        │  │  Validation             │ │
//! │  │  Unauthorized   │  │  (logged, then  │  │  LoginRequired          │ │
//! │  │  Transport      │  │   swallowed by  │  │  AdminRequired          │ │
//! │  │  ResponseParse  │  │   the stores)   │  │  EmptyCart              │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every variant's Display string is short and human-readable; raw       │
//! │  transport detail goes to the log, never to the user.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstall_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error covering transport, storage, and pre-flight failures.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Network / API Errors
    // =========================================================================
    /// The API answered with a non-2xx status.
    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API rejected the bearer token (401).
    #[error("Not authorized")]
    Unauthorized,

    /// The request never completed (DNS, connect, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape we expected.
    #[error("Failed to parse API response: {0}")]
    ResponseParse(String),

    // =========================================================================
    // Storage Errors
    // =========================================================================
    /// Durable client storage failed. Stores log and swallow this; it only
    /// propagates from direct storage access.
    #[error("Storage error: {0}")]
    Storage(String),

    // =========================================================================
    // Pre-flight Errors (no network round-trip happened)
    // =========================================================================
    /// Input failed client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation requires a signed-in session. The caller should route
    /// the user to login rather than retry.
    #[error("Please log in to continue")]
    LoginRequired,

    /// The operation requires the admin role.
    #[error("Access denied: admin role required")]
    AdminRequired,

    /// Checkout was invoked on an empty cart.
    #[error("Your cart is empty")]
    EmptyCart,
}

impl From<crate::storage::StorageError> for ClientError {
    fn from(e: crate::storage::StorageError) -> Self {
        ClientError::Storage(e.to_string())
    }
}

impl ClientError {
    /// Maps an HTTP status + body into the right variant.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            ClientError::Unauthorized
        } else {
            ClientError::Api { status, message }
        }
    }

    /// True for the variants that mean "the server said no", as opposed to
    /// local pre-flight failures.
    pub const fn is_api_error(&self) -> bool {
        matches!(
            self,
            ClientError::Api { .. } | ClientError::Unauthorized | ClientError::Transport(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_401() {
        assert!(matches!(
            ClientError::from_status(401, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            ClientError::from_status(404, "missing".to_string()),
            ClientError::Api { status: 404, .. }
        ));
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ClientError::LoginRequired.to_string(), "Please log in to continue");
        assert_eq!(ClientError::EmptyCart.to_string(), "Your cart is empty");
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: ClientError = ValidationError::Required { field: "username" }.into();
        assert_eq!(err.to_string(), "username is required");
        assert!(!err.is_api_error());
    }
}
