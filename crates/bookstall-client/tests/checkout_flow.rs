//! Checkout gating and the cross-store pipeline: the order call only fires
//! for an authenticated session with a non-empty cart, and the cart clears
//! only after the server accepts.

mod common;

use std::sync::Arc;

use bookstall_client::mocks::MockApi;
use bookstall_client::storage::{KeyValueStorage, MemoryStorage};
use bookstall_client::{ClientError, Storefront};
use bookstall_core::types::{Book, LoginCredentials, OrderStatus, Role, User};

fn harness() -> (Arc<MockApi>, Storefront<MockApi>) {
    common::init_tracing();
    let api = Arc::new(MockApi::new());
    let storage = Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStorage>;
    let storefront = Storefront::with_api(Arc::clone(&api), storage);
    (api, storefront)
}

async fn sign_in(api: &MockApi, storefront: &Storefront<MockApi>, role: Role) {
    api.allow_login(MockApi::sample_login("ada", role));
    api.allow_profile(User {
        role,
        ..MockApi::sample_user(7, "ada")
    });
    storefront
        .session()
        .login(&LoginCredentials {
            username: "ada".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_checkout_requires_login_before_any_api_call() {
    let (api, storefront) = harness();
    storefront.initialize().await;
    storefront.cart().add_to_cart(&Book::sample(1, "Dune", "9.99", 5), 2);

    let err = storefront.checkout().await.unwrap_err();

    assert!(matches!(err, ClientError::LoginRequired));
    // Gated locally: the order endpoint was never consulted
    assert_eq!(api.order_calls(), 0);
    // And the cart is intact for after the user signs in
    assert_eq!(storefront.cart().total_items(), 2);
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart() {
    let (api, storefront) = harness();
    sign_in(&api, &storefront, Role::Customer).await;

    let err = storefront.checkout().await.unwrap_err();

    assert!(matches!(err, ClientError::EmptyCart));
    assert_eq!(api.order_calls(), 0);
}

#[tokio::test]
async fn test_successful_checkout_submits_lines_and_clears_cart() {
    let (api, storefront) = harness();
    sign_in(&api, &storefront, Role::Customer).await;
    storefront.cart().add_to_cart(&Book::sample(1, "Dune", "9.99", 5), 2);
    storefront.cart().add_to_cart(&Book::sample(2, "Hyperion", "12.50", 4), 1);

    let order = storefront.checkout().await.unwrap();

    assert_eq!(api.order_calls(), 1);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].book, 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].book, 2);
    assert!(storefront.cart().is_empty());
}

#[tokio::test]
async fn test_order_status_change_requires_admin() {
    let (api, storefront) = harness();
    sign_in(&api, &storefront, Role::Customer).await;

    let err = storefront
        .update_order_status(42, OrderStatus::Shipped)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::AdminRequired));
    assert_eq!(api.status_calls(), 0);
}

#[tokio::test]
async fn test_admin_can_change_order_status() {
    let (api, storefront) = harness();
    sign_in(&api, &storefront, Role::Admin).await;

    let order = storefront
        .update_order_status(42, OrderStatus::Shipped)
        .await
        .unwrap();

    assert_eq!(api.status_calls(), 1);
    assert_eq!(order.id, 42);
    assert_eq!(order.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_signed_out_visitor_cannot_change_order_status() {
    let (api, storefront) = harness();
    storefront.initialize().await;

    let err = storefront
        .update_order_status(42, OrderStatus::Canceled)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::AdminRequired));
    assert_eq!(api.status_calls(), 0);
}
