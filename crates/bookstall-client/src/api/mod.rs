//! # Bookstore API Client
//!
//! JSON-over-HTTP consumer of the external bookstore API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      API Request Flow                                   │
//! │                                                                         │
//! │  Store / caller                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::request(method, path)                                       │
//! │       │  1. Build URL from ClientConfig.base_url                        │
//! │       │  2. Read access token from storage; attach                      │
//! │       │     `Authorization: Bearer <token>` when present                │
//! │       ▼                                                                 │
//! │  execute()                                                              │
//! │       │  3. Send, await to completion (no client-side timeout)          │
//! │       │  4. Non-2xx -> ClientError::Api / Unauthorized (401)            │
//! │       │  5. Decode JSON -> ClientError::ResponseParse on shape drift    │
//! │       ▼                                                                 │
//! │  Typed response                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Seams
//! The stores depend on the narrow [`SessionApi`] and [`OrderApi`] traits,
//! not on `ApiClient` directly, so tests can substitute the hand-written
//! implementations in [`crate::mocks`].

mod auth;
mod catalog;
mod orders;
mod profile;

pub use catalog::BookListQuery;

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use bookstall_core::types::{LoginCredentials, LoginResponse, Order, OrderItem, OrderStatus, RegisterRequest, User};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::storage::{keys, KeyValueStorage};

// =============================================================================
// Seam Traits
// =============================================================================

/// The slice of the API the Session Store depends on.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// `POST /auth/login/`
    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<LoginResponse>;

    /// `POST /auth/register/`
    async fn register(&self, data: &RegisterRequest) -> ClientResult<User>;

    /// `POST /auth/logout/`: surrenders the refresh token for server-side
    /// invalidation.
    async fn logout(&self, refresh_token: &str) -> ClientResult<()>;

    /// `GET /profile/users/`
    async fn get_profile(&self) -> ClientResult<User>;
}

/// The slice of the API the checkout and admin order flows depend on.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    /// `POST /orders/`
    async fn create_order(&self, items: &[OrderItem]) -> ClientResult<Order>;

    /// `PATCH /orders/:id/status/` (admin)
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order>;
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the bookstore API.
///
/// The bearer token is read from durable storage on every request, mirroring
/// the token lifecycle: the Session Store writes it on login and purges it on
/// logout or failed verification, and this client picks the change up
/// automatically.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    storage: Arc<dyn KeyValueStorage>,
}

impl ApiClient {
    /// Creates a client against `config.base_url`, reading credentials from
    /// `storage`.
    pub fn new(config: &ClientConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: config.base_url.clone(),
            storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with the bearer header attached when a token is
    /// present in storage.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.storage.get(keys::ACCESS_TOKEN) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends a request and decodes a JSON response body.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "API request failed");
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::ResponseParse(e.to_string()))
    }

    /// Sends a request and discards any response body (logout, deletes).
    async fn execute_empty(&self, builder: RequestBuilder) -> ClientResult<()> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "API request failed");
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        debug!(path, params = query.len(), "GET");
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "POST");
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        debug!(path, "POST");
        self.execute_empty(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "PATCH");
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> ClientResult<()> {
        debug!(path, "DELETE");
        self.execute_empty(self.request(Method::DELETE, path)).await
    }
}
