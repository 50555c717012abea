//! # Storefront
//!
//! Facade that wires one storage backend, one API handle, and both stores
//! into a single client instance, and hosts the operations that cut across
//! stores (checkout, admin order management).
//!
//! ## Checkout Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout()                                        │
//! │                                                                         │
//! │  session authenticated? ──no──► Err(LoginRequired)   (no API call)      │
//! │       │ yes                                                             │
//! │  cart non-empty? ───────no──► Err(EmptyCart)         (no API call)      │
//! │       │ yes                                                             │
//! │  POST /orders/ with the cart's line items                               │
//! │       │                                                                 │
//! │       ├── Err(e) ─────────► Err(e), cart UNTOUCHED (retry-safe)         │
//! │       │                                                                 │
//! │       └── Ok(order) ──────► clear cart, Ok(order)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use bookstall_core::types::{Order, OrderStatus};

use crate::api::{ApiClient, OrderApi, SessionApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::storage::KeyValueStorage;
use crate::stores::{CartStore, SessionStore};

/// One storefront client: cart, session, and the shared API handle.
///
/// Generic over the API seam so tests run the full checkout pipeline against
/// [`crate::mocks::MockApi`] without a network.
pub struct Storefront<A: SessionApi + OrderApi> {
    api: Arc<A>,
    session: SessionStore<A>,
    cart: CartStore,
}

impl Storefront<ApiClient> {
    /// Builds a storefront talking HTTP to `config.base_url`, with both
    /// stores hydrating from `storage`.
    pub fn new(config: &ClientConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let api = Arc::new(ApiClient::new(config, Arc::clone(&storage)));
        Self::with_api(api, storage)
    }
}

impl<A: SessionApi + OrderApi> Storefront<A> {
    /// Builds a storefront over an arbitrary API implementation.
    pub fn with_api(api: Arc<A>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Storefront {
            session: SessionStore::new(Arc::clone(&api), Arc::clone(&storage)),
            cart: CartStore::new(storage),
            api,
        }
    }

    /// Runs startup reconciliation for the session store. The cart hydrates
    /// synchronously at construction and needs no equivalent.
    pub async fn initialize(&self) {
        self.session.initialize().await;
    }

    // =========================================================================
    // Store Access
    // =========================================================================

    /// The session store.
    pub fn session(&self) -> &SessionStore<A> {
        &self.session
    }

    /// The cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The shared API handle, for direct catalog and order reads.
    pub fn api(&self) -> &A {
        &self.api
    }

    // =========================================================================
    // Cross-Store Operations
    // =========================================================================

    /// Submits the cart as an order.
    ///
    /// Gated locally before any network traffic: an unauthenticated session
    /// or an empty cart is rejected without touching the API. The cart is
    /// cleared only once the server accepts the order, so a failed submission
    /// leaves it intact for retry.
    pub async fn checkout(&self) -> ClientResult<Order> {
        if !self.session.is_authenticated().await {
            warn!("Checkout attempted without a session");
            return Err(ClientError::LoginRequired);
        }

        let items = self.cart.order_items();
        if items.is_empty() {
            return Err(ClientError::EmptyCart);
        }

        let order = self.api.create_order(&items).await?;
        info!(order_id = order.id, items = items.len(), "Order placed");
        self.cart.clear();
        Ok(order)
    }

    /// Moves an order to `status`. Admin-only; gated locally on the mirrored
    /// role before the API is consulted.
    pub async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<Order> {
        if !self.session.is_admin().await {
            warn!(order_id, "Order status change attempted without admin role");
            return Err(ClientError::AdminRequired);
        }

        let order = self.api.update_order_status(order_id, status).await?;
        info!(order_id, status = ?order.status, "Order status updated");
        Ok(order)
    }
}
