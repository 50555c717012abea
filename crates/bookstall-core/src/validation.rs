//! # Validation Module
//!
//! Client-side input validation, run before any network call.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (client-side)                                    │
//! │  ├── Format checks (empty, length, mismatch)                           │
//! │  └── Immediate user feedback, no network round-trip wasted             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Bookstore API (server-side)                                  │
//! │  ├── Uniqueness (username, email)                                      │
//! │  └── Authoritative password policy                                     │
//! │                                                                         │
//! │  Defense in depth: passing layer 1 does not guarantee layer 2          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{LoginCredentials, RegisterRequest};
use crate::MIN_PASSWORD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least [`MIN_PASSWORD_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use bookstall_core::validation::validate_password;
///
/// assert!(validate_password("correct horse").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password",
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Validates a password change: new password policy plus confirmation match.
pub fn validate_password_change(new_password: &str, confirm: &str) -> ValidationResult<()> {
    if new_password != confirm {
        return Err(ValidationError::Mismatch {
            field: "confirm_password",
            other: "new_password",
        });
    }
    validate_password(new_password)
}

/// Validates a username.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required { field: "username" });
    }
    Ok(())
}

/// Validates an email address shape. The API is the authority; this only
/// rejects obviously malformed input.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "expected name@domain",
        });
    }
    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates login credentials before the network call.
pub fn validate_login(credentials: &LoginCredentials) -> ValidationResult<()> {
    validate_username(&credentials.username)?;
    if credentials.password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    Ok(())
}

/// Validates a registration payload before the network call.
pub fn validate_registration(data: &RegisterRequest) -> ValidationResult<()> {
    validate_username(&data.username)?;
    validate_email(&data.email)?;
    validate_password(&data.password)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
