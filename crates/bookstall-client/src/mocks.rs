//! # Mock API
//!
//! Hand-written, stateful [`SessionApi`]/[`OrderApi`] implementation for
//! tests: configure responses up front, then assert on recorded calls.
//!
//! ```rust
//! use std::sync::Arc;
//! use bookstall_client::mocks::MockApi;
//!
//! let api = Arc::new(MockApi::new());
//! api.allow_profile(MockApi::sample_user(7, "ada"));
//! // deny_profile() instead simulates a revoked token (401)
//! ```

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use bookstall_core::types::{
    LoginCredentials, LoginResponse, Order, OrderItem, OrderStatus, RegisterRequest, Role, User,
};

use crate::api::{OrderApi, SessionApi};
use crate::error::{ClientError, ClientResult};

/// Configurable in-memory stand-in for the bookstore API.
///
/// Every endpoint answers from pre-configured state and records that it was
/// called; nothing touches the network.
#[derive(Debug, Default)]
pub struct MockApi {
    login_response: Mutex<Option<LoginResponse>>,
    profile: Mutex<Option<User>>,
    logout_fails: AtomicBool,

    login_calls: AtomicUsize,
    profile_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    order_calls: AtomicUsize,
    status_calls: AtomicUsize,
    next_order_id: AtomicI64,
}

impl MockApi {
    /// A mock where every endpoint answers 401 until configured otherwise.
    pub fn new() -> Self {
        MockApi {
            next_order_id: AtomicI64::new(1),
            ..MockApi::default()
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Makes `login` succeed with `response`.
    pub fn allow_login(&self, response: LoginResponse) {
        *self.login_response.lock().expect("mock mutex poisoned") = Some(response);
    }

    /// Makes `get_profile` succeed with `user`.
    pub fn allow_profile(&self, user: User) {
        *self.profile.lock().expect("mock mutex poisoned") = Some(user);
    }

    /// Makes `get_profile` answer 401, simulating a stale or revoked token.
    pub fn deny_profile(&self) {
        *self.profile.lock().expect("mock mutex poisoned") = None;
    }

    /// Makes `logout` fail with a transport error.
    pub fn fail_logout(&self) {
        self.logout_fails.store(true, Ordering::SeqCst);
    }

    // =========================================================================
    // Call Recording
    // =========================================================================

    /// Times `login` was called.
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    /// Times `get_profile` was called.
    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    /// Times `logout` was called.
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    /// Times `create_order` was called.
    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    /// Times `update_order_status` was called.
    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Fixtures
    // =========================================================================

    /// A verified customer profile.
    pub fn sample_user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: username.to_string(),
            last_name: "Tester".to_string(),
            role: Role::Customer,
        }
    }

    /// A matching login response for `username`.
    pub fn sample_login(username: &str, role: Role) -> LoginResponse {
        LoginResponse {
            username: username.to_string(),
            role,
            access: format!("access-{username}"),
            refresh: format!("refresh-{username}"),
        }
    }

    fn unauthorized() -> ClientError {
        ClientError::Unauthorized
    }
}

impl SessionApi for MockApi {
    async fn login(&self, _credentials: &LoginCredentials) -> ClientResult<LoginResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_response
            .lock()
            .expect("mock mutex poisoned")
            .clone()
            .ok_or_else(Self::unauthorized)
    }

    async fn register(&self, data: &RegisterRequest) -> ClientResult<User> {
        Ok(User {
            id: 1,
            username: data.username.clone(),
            email: data.email.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            role: data.role.unwrap_or_default(),
        })
    }

    async fn logout(&self, _refresh_token: &str) -> ClientResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_fails.load(Ordering::SeqCst) {
            Err(ClientError::Transport("connection reset".to_string()))
        } else {
            Ok(())
        }
    }

    async fn get_profile(&self) -> ClientResult<User> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile
            .lock()
            .expect("mock mutex poisoned")
            .clone()
            .ok_or_else(Self::unauthorized)
    }
}

impl OrderApi for MockApi {
    async fn create_order(&self, items: &[OrderItem]) -> ClientResult<Order> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Order {
            id: self.next_order_id.fetch_add(1, Ordering::SeqCst),
            user: 1,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
            total_amount: "0.00".to_string(),
            items: items.to_vec(),
        })
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Order {
            id,
            user: 1,
            created_at: Utc::now(),
            status,
            total_amount: "0.00".to_string(),
            items: Vec::new(),
        })
    }
}
