//! # Session State Machine
//!
//! The signed-in identity, modeled as an explicit tagged state rather than
//! nullable fields.
//!
//! ## State Machine (per browser session)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session States                                      │
//! │                                                                         │
//! │                  ┌───────────────┐                                      │
//! │                  │ Uninitialized │                                      │
//! │                  └───────┬───────┘                                      │
//! │         stored creds     │     no stored creds                          │
//! │        ┌─────────────────┴──────────────────┐                           │
//! │        ▼                                    ▼                           │
//! │  ┌─────────────┐   profile fetch ok   ┌───────────┐                    │
//! │  │ Provisional │─────────────────────►│ Verified  │                    │
//! │  └──────┬──────┘                      └─────┬─────┘                    │
//! │         │ profile fetch failed              │ logout / 401             │
//! │         ▼                                   ▼                           │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │                  SignedOut                   │ ──login──► Verified  │
//! │  └──────────────────────────────────────────────┘                      │
//! │                                                                         │
//! │  Provisional is optimistic: the UI may render authenticated chrome      │
//! │  before the profile fetch resolves. A failed fetch purges credentials   │
//! │  (fail closed, never fail open).                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Role, User};

// =============================================================================
// Session Identity
// =============================================================================

/// The signed-in user's visible identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl SessionIdentity {
    /// Builds the placeholder identity reconstructed from persisted
    /// token+role+username before the profile fetch resolves.
    ///
    /// `user_id` 0 and empty name fields mark it as unverified; the verified
    /// profile replaces them.
    pub fn provisional(username: impl Into<String>, role: Role) -> Self {
        SessionIdentity {
            user_id: 0,
            username: username.into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role,
        }
    }
}

impl From<User> for SessionIdentity {
    fn from(user: User) -> Self {
        SessionIdentity {
            user_id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Explicit session state. Absence of identity is always the `SignedOut`
/// variant, never a partial or ambiguous state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Startup reconciliation has not completed yet.
    #[default]
    Uninitialized,

    /// Optimistic identity restored from storage, unverified.
    Provisional(SessionIdentity),

    /// Identity confirmed against the API.
    Verified(SessionIdentity),

    /// No identity. Terminal until the next login.
    SignedOut,
}

impl SessionState {
    /// Current identity, if any. Provisional identities count: the UI renders
    /// authenticated chrome optimistically while verification is in flight.
    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            SessionState::Provisional(id) | SessionState::Verified(id) => Some(id),
            SessionState::Uninitialized | SessionState::SignedOut => None,
        }
    }

    /// Pure projection: an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// Pure projection: identity present and `role == admin`. Derived from
    /// the identity's actual role, never a separately maintained flag.
    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|id| id.role == Role::Admin)
    }

    /// Short label for log lines.
    pub const fn phase(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Provisional(_) => "provisional",
            SessionState::Verified(_) => "verified",
            SessionState::SignedOut => "signed_out",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn verified_admin() -> SessionState {
        SessionState::Verified(SessionIdentity {
            user_id: 7,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Admin,
        })
    }

    #[test]
    fn test_uninitialized_and_signed_out_have_no_identity() {
        assert!(!SessionState::Uninitialized.is_authenticated());
        assert!(!SessionState::SignedOut.is_authenticated());
        assert!(!SessionState::SignedOut.is_admin());
    }

    #[test]
    fn test_provisional_counts_as_authenticated() {
        let state = SessionState::Provisional(SessionIdentity::provisional("ada", Role::Customer));
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_is_admin_derives_from_role() {
        assert!(verified_admin().is_admin());

        let customer =
            SessionState::Provisional(SessionIdentity::provisional("bob", Role::Customer));
        assert!(!customer.is_admin());
    }

    #[test]
    fn test_provisional_identity_placeholders() {
        let id = SessionIdentity::provisional("ada", Role::Admin);
        assert_eq!(id.user_id, 0);
        assert!(id.email.is_empty());
        assert_eq!(id.role, Role::Admin);
    }

    #[test]
    fn test_identity_from_user() {
        let user = User {
            id: 7,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Admin,
        };
        let id = SessionIdentity::from(user);
        assert_eq!(id.user_id, 7);
        assert_eq!(id.role, Role::Admin);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(SessionState::Uninitialized.phase(), "uninitialized");
        assert_eq!(verified_admin().phase(), "verified");
    }
}
