//! # Session Store
//!
//! Authoritative in-memory mirror of "who is logged in and with what role",
//! backed by externally issued bearer credentials.
//!
//! ## Startup Reconciliation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 initialize(), once per store                            │
//! │                                                                         │
//! │  read token + role + username from storage                              │
//! │       │                                                                 │
//! │       ├── any missing ──────────────────────────► SignedOut             │
//! │       │                                                                 │
//! │       └── all present ──► Provisional identity (UI may render           │
//! │                           authenticated chrome immediately)             │
//! │                                │                                        │
//! │                     GET /profile/users/                                 │
//! │                    ┌───────────┴───────────┐                            │
//! │                    ▼                       ▼                            │
//! │              fetch succeeded         fetch failed                       │
//! │                    │                       │                            │
//! │                    ▼                       ▼                            │
//! │               Verified            purge ALL credentials,                │
//! │            (placeholder id        SignedOut                             │
//! │             fields filled in)     (fail closed, never open)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Trust-but-verify: persisted role and username are adopted without
//! re-verification, then replaced by the fetched profile; any doubt about the
//! token discards everything.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bookstall_core::session::{SessionIdentity, SessionState};
use bookstall_core::types::{LoginCredentials, LoginResponse, RegisterRequest, Role, User};
use bookstall_core::validation::{validate_login, validate_registration};

use crate::api::SessionApi;
use crate::error::ClientResult;
use crate::storage::{keys, KeyValueStorage};

/// Session store over an API seam `A` (the real [`crate::api::ApiClient`] or
/// a mock in tests).
pub struct SessionStore<A: SessionApi> {
    api: Arc<A>,
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<SessionState>,
}

impl<A: SessionApi> SessionStore<A> {
    /// Creates the store in the `Uninitialized` state. Call
    /// [`SessionStore::initialize`] before reading identity.
    pub fn new(api: Arc<A>, storage: Arc<dyn KeyValueStorage>) -> Self {
        SessionStore {
            api,
            storage,
            state: RwLock::new(SessionState::Uninitialized),
        }
    }

    // =========================================================================
    // Startup Reconciliation
    // =========================================================================

    /// Reconciles persisted credentials with the API, once per store.
    ///
    /// Stored credentials yield an immediate provisional identity, then a
    /// profile fetch either verifies it or purges everything (fail closed).
    pub async fn initialize(&self) {
        let token = self.storage.get(keys::ACCESS_TOKEN);
        let role = self.storage.get(keys::USER_ROLE).as_deref().and_then(Role::parse);
        let username = self.storage.get(keys::USERNAME);

        let (Some(_), Some(role), Some(username)) = (token, role, username) else {
            debug!("No stored credentials, starting signed out");
            *self.state.write().await = SessionState::SignedOut;
            return;
        };

        // Optimistic: render authenticated chrome without waiting on network
        *self.state.write().await =
            SessionState::Provisional(SessionIdentity::provisional(username.clone(), role));
        debug!(%username, "Restored provisional session, verifying");

        match self.api.get_profile().await {
            Ok(user) => {
                info!(user_id = user.id, "Session verified");
                *self.state.write().await = SessionState::Verified(user.into());
            }
            Err(e) => {
                warn!(error = %e, "Profile verification failed, purging credentials");
                self.purge_credentials();
                *self.state.write().await = SessionState::SignedOut;
            }
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Logs in against the API.
    ///
    /// On success the token pair, role, and username are persisted, then the
    /// verified profile is fetched and adopted. A failed login call mutates
    /// nothing; a failed post-login verification purges everything the login
    /// just persisted.
    ///
    /// Returns the raw login response (tokens + role) for any immediate use.
    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<LoginResponse> {
        validate_login(credentials)?;

        let response = self.api.login(credentials).await?;
        self.persist_credentials(&response);
        *self.state.write().await = SessionState::Provisional(SessionIdentity::provisional(
            response.username.clone(),
            response.role,
        ));

        match self.api.get_profile().await {
            Ok(user) => {
                info!(user_id = user.id, username = %user.username, "Logged in");
                *self.state.write().await = SessionState::Verified(user.into());
                Ok(response)
            }
            Err(e) => {
                warn!(error = %e, "Post-login profile fetch failed, purging credentials");
                self.purge_credentials();
                *self.state.write().await = SessionState::SignedOut;
                Err(e)
            }
        }
    }

    /// Registers a new account. Does not establish a session: no token is
    /// issued as a side effect of registration.
    pub async fn register(&self, data: &RegisterRequest) -> ClientResult<User> {
        validate_registration(data)?;
        self.api.register(data).await
    }

    /// Logs out.
    ///
    /// Server-side token invalidation is best-effort; local credentials and
    /// identity are cleared regardless of whether that call succeeds, which
    /// is why this operation is infallible.
    pub async fn logout(&self) {
        if let Some(refresh) = self.storage.get(keys::REFRESH_TOKEN) {
            if let Err(e) = self.api.logout(&refresh).await {
                warn!(error = %e, "Server-side logout failed, clearing local session anyway");
            }
        }

        self.purge_credentials();
        *self.state.write().await = SessionState::SignedOut;
        info!("Logged out");
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Current identity, if any (provisional identities included).
    pub async fn identity(&self) -> Option<SessionIdentity> {
        self.state.read().await.identity().cloned()
    }

    /// Pure projection: an identity is present.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Pure projection: identity present with the admin role.
    pub async fn is_admin(&self) -> bool {
        self.state.read().await.is_admin()
    }

    // =========================================================================
    // Credential Persistence
    // =========================================================================

    fn persist_credentials(&self, response: &LoginResponse) {
        let entries = [
            (keys::ACCESS_TOKEN, response.access.as_str()),
            (keys::REFRESH_TOKEN, response.refresh.as_str()),
            (keys::USER_ROLE, response.role.as_str()),
            (keys::USERNAME, response.username.as_str()),
        ];
        for (key, value) in entries {
            if let Err(e) = self.storage.set(key, value) {
                warn!(key, error = %e, "Failed to persist credential, continuing memory-only");
            }
        }
    }

    fn purge_credentials(&self) {
        for key in [
            keys::ACCESS_TOKEN,
            keys::REFRESH_TOKEN,
            keys::USER_ROLE,
            keys::USERNAME,
        ] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove credential");
            }
        }
    }
}
