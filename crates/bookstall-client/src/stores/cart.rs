//! # Cart Store
//!
//! Single authority for the visitor's pending purchase selection.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Cart Store Mutation Path                               │
//! │                                                                         │
//! │  add_to_cart / update_quantity / remove_from_cart / clear               │
//! │       │                                                                 │
//! │       ▼  (lock held for the whole block)                                │
//! │  1. Mutate in-memory Cart (pure math from bookstall-core)               │
//! │  2. Serialize the full cart and write it to storage                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Operation complete: no observable state between mutate and persist     │
//! │                                                                         │
//! │  Storage write failure: logged, swallowed. In-memory state remains     │
//! │  the effective truth for the rest of the session.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no network call anywhere in this store; operations are local and
//! cannot fail transiently.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bookstall_core::cart::{Cart, CartLine, CartTotals};
use bookstall_core::money::Money;
use bookstall_core::types::{Book, OrderItem};

use crate::storage::{keys, KeyValueStorage};

/// Version stamped into the persisted blob so future shape changes can be
/// detected instead of misparsed.
const CART_SCHEMA_VERSION: u32 = 1;

/// The persisted form of the cart.
#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    version: u32,
    lines: Vec<CartLine>,
}

/// Client-side cart store: in-memory [`Cart`] plus write-through persistence.
///
/// The cart belongs to the browser profile, not to a user identity; it is
/// loaded at construction regardless of login state.
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Arc<dyn KeyValueStorage>,
}

impl CartStore {
    /// Opens the store, hydrating from durable storage. A missing, corrupt,
    /// or wrong-version snapshot yields an empty cart, never an error.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let cart = Self::hydrate(storage.as_ref());
        CartStore {
            cart: Mutex::new(cart),
            storage,
        }
    }

    fn hydrate(storage: &dyn KeyValueStorage) -> Cart {
        let Some(raw) = storage.get(keys::CART) else {
            return Cart::new();
        };
        match serde_json::from_str::<CartSnapshot>(&raw) {
            Ok(snapshot) if snapshot.version == CART_SCHEMA_VERSION => {
                debug!(lines = snapshot.lines.len(), "Cart restored from storage");
                Cart::from_lines(snapshot.lines)
            }
            Ok(snapshot) => {
                warn!(version = snapshot.version, "Unknown cart schema version, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse persisted cart, starting empty");
                Cart::new()
            }
        }
    }

    /// Re-persists the full cart. Failure degrades to memory-only operation.
    fn persist(&self, cart: &Cart) {
        let snapshot = CartSnapshot {
            version: CART_SCHEMA_VERSION,
            lines: cart.lines().to_vec(),
        };
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(keys::CART, &raw) {
            warn!(error = %e, "Failed to persist cart, continuing memory-only");
        }
    }

    /// Runs a mutation and persists the result before releasing the lock, so
    /// no caller observes a mutated-but-unpersisted cart.
    fn mutate<F: FnOnce(&mut Cart)>(&self, f: F) {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart);
        self.persist(&cart);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds `quantity` of `book`, merging with any existing line and clamping
    /// to the book's stock. Never fails; over-stock requests are capped.
    pub fn add_to_cart(&self, book: &Book, quantity: u32) {
        debug!(book_id = book.id, quantity, "add_to_cart");
        self.mutate(|cart| cart.add(book, quantity));
    }

    /// Sets the quantity for `book_id`. Zero or negative removes the line;
    /// anything above the stock snapshot is clamped down.
    pub fn update_quantity(&self, book_id: i64, quantity: i64) {
        debug!(book_id, quantity, "update_quantity");
        self.mutate(|cart| cart.update_quantity(book_id, quantity));
    }

    /// Removes the line for `book_id`; no-op if absent.
    pub fn remove_from_cart(&self, book_id: i64) {
        debug!(book_id, "remove_from_cart");
        self.mutate(|cart| cart.remove(book_id));
    }

    /// Empties the cart unconditionally (e.g. after successful checkout).
    pub fn clear(&self) {
        debug!("clear_cart");
        self.mutate(Cart::clear);
    }

    // =========================================================================
    // Reads (recomputed on every access, never cached)
    // =========================================================================

    /// Current lines, in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.lock().expect("cart mutex poisoned").lines().to_vec()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 {
        self.cart.lock().expect("cart mutex poisoned").total_items()
    }

    /// Sum of `quantity × unit price` across all lines.
    pub fn total_price(&self) -> Money {
        self.cart.lock().expect("cart mutex poisoned").total_price()
    }

    /// Both derived totals in one lock acquisition.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.cart.lock().expect("cart mutex poisoned"))
    }

    /// True when no lines are present.
    pub fn is_empty(&self) -> bool {
        self.cart.lock().expect("cart mutex poisoned").is_empty()
    }

    /// Projects the cart into the order-submission payload.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.cart.lock().expect("cart mutex poisoned").order_items()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
