//! Session lifecycle: startup reconciliation, login, and the fail-closed
//! purge paths, all run against the stateful mock API.

mod common;

use std::sync::Arc;

use bookstall_client::mocks::MockApi;
use bookstall_client::storage::{keys, KeyValueStorage, MemoryStorage};
use bookstall_client::stores::SessionStore;
use bookstall_core::session::SessionState;
use bookstall_core::types::{LoginCredentials, Role};

fn harness() -> (Arc<MockApi>, Arc<MemoryStorage>, SessionStore<MockApi>) {
    common::init_tracing();
    let api = Arc::new(MockApi::new());
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(
        Arc::clone(&api),
        Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
    );
    (api, storage, store)
}

fn seed_credentials(storage: &MemoryStorage) {
    storage.seed(keys::ACCESS_TOKEN, "stored-access");
    storage.seed(keys::REFRESH_TOKEN, "stored-refresh");
    storage.seed(keys::USER_ROLE, "customer");
    storage.seed(keys::USERNAME, "ada");
}

fn credentials() -> LoginCredentials {
    LoginCredentials {
        username: "ada".to_string(),
        password: "correct horse".to_string(),
    }
}

#[tokio::test]
async fn test_startup_without_credentials_is_signed_out() {
    let (api, _, store) = harness();

    store.initialize().await;

    assert!(matches!(store.state().await, SessionState::SignedOut));
    // No point verifying a token that does not exist
    assert_eq!(api.profile_calls(), 0);
}

#[tokio::test]
async fn test_startup_with_valid_credentials_verifies_profile() {
    let (api, storage, store) = harness();
    seed_credentials(&storage);
    api.allow_profile(MockApi::sample_user(7, "ada"));

    store.initialize().await;

    let state = store.state().await;
    let SessionState::Verified(identity) = state else {
        panic!("expected verified session, got {state:?}");
    };
    assert_eq!(identity.user_id, 7);
    assert_eq!(identity.username, "ada");
    assert_eq!(api.profile_calls(), 1);
    // Credentials remain persisted for the next restart
    assert_eq!(storage.get(keys::ACCESS_TOKEN).as_deref(), Some("stored-access"));
}

#[tokio::test]
async fn test_startup_with_stale_token_purges_everything() {
    let (api, storage, store) = harness();
    seed_credentials(&storage);
    // deny_profile is the default, stated here for emphasis
    api.deny_profile();

    store.initialize().await;

    assert!(matches!(store.state().await, SessionState::SignedOut));
    assert!(!store.is_authenticated().await);
    // Fail closed: no credential survives a failed verification
    assert_eq!(storage.get(keys::ACCESS_TOKEN), None);
    assert_eq!(storage.get(keys::REFRESH_TOKEN), None);
    assert_eq!(storage.get(keys::USER_ROLE), None);
    assert_eq!(storage.get(keys::USERNAME), None);
}

#[tokio::test]
async fn test_login_persists_credentials_and_verifies() {
    let (api, storage, store) = harness();
    api.allow_login(MockApi::sample_login("ada", Role::Customer));
    api.allow_profile(MockApi::sample_user(7, "ada"));

    let response = store.login(&credentials()).await.unwrap();
    assert_eq!(response.access, "access-ada");

    assert!(store.is_authenticated().await);
    assert!(!store.is_admin().await);
    assert_eq!(store.identity().await.unwrap().user_id, 7);
    assert_eq!(storage.get(keys::ACCESS_TOKEN).as_deref(), Some("access-ada"));
    assert_eq!(storage.get(keys::REFRESH_TOKEN).as_deref(), Some("refresh-ada"));
    assert_eq!(storage.get(keys::USER_ROLE).as_deref(), Some("customer"));
    assert_eq!(storage.get(keys::USERNAME).as_deref(), Some("ada"));
}

#[tokio::test]
async fn test_rejected_login_mutates_nothing() {
    let (api, storage, store) = harness();
    // No allow_login: the API answers 401

    let err = store.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, bookstall_client::ClientError::Unauthorized));

    assert!(matches!(store.state().await, SessionState::Uninitialized));
    assert!(storage.is_empty());
    assert_eq!(api.login_calls(), 1);
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_the_api() {
    let (api, _, store) = harness();

    let empty = LoginCredentials {
        username: String::new(),
        password: "whatever".to_string(),
    };
    assert!(store.login(&empty).await.is_err());
    assert_eq!(api.login_calls(), 0);
}

#[tokio::test]
async fn test_failed_post_login_verification_purges() {
    let (api, storage, store) = harness();
    api.allow_login(MockApi::sample_login("ada", Role::Customer));
    // Profile fetch fails even though login succeeded

    assert!(store.login(&credentials()).await.is_err());

    assert!(matches!(store.state().await, SessionState::SignedOut));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_logout_clears_local_state_even_when_server_fails() {
    let (api, storage, store) = harness();
    api.allow_login(MockApi::sample_login("ada", Role::Customer));
    api.allow_profile(MockApi::sample_user(7, "ada"));
    store.login(&credentials()).await.unwrap();

    api.fail_logout();
    store.logout().await;

    assert_eq!(api.logout_calls(), 1);
    assert!(matches!(store.state().await, SessionState::SignedOut));
    assert!(!store.is_authenticated().await);
    assert!(storage.is_empty());
}
