//! # bookstall-core: Pure Business Logic for Bookstall
//!
//! This crate is the **heart** of the Bookstall storefront client. It contains
//! all business logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookstall Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (out of scope)                      │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Orders ──► Admin          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bookstall-client                             │   │
//! │  │    CartStore, SessionStore, ApiClient, durable storage         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ bookstall-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  session  │  │   │
//! │  │   │   Book    │  │   Money   │  │   Cart    │  │  State    │  │   │
//! │  │   │   Order   │  │  parsing  │  │ CartLine  │  │  machine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire/domain types (Book, Author, Order, User, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart math: merge, clamp, derived totals
//! - [`session`] - Explicit session state machine
//! - [`validation`] - Client-side input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstall_core::cart::Cart;
//! use bookstall_core::types::Book;
//!
//! let book = Book::sample(1, "Dune", "9.99", 3);
//! let mut cart = Cart::new();
//!
//! // Adding beyond stock silently clamps; the backend re-validates at checkout
//! cart.add(&book, 5);
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.total_price().cents(), 2997);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookstall_core::Money` instead of
// `use bookstall_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use session::{SessionIdentity, SessionState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Ceiling applied when clamping a quantity for a line whose stock snapshot
/// is unavailable.
///
/// ## Business Reason
/// The cart never stores an unbounded quantity. When a persisted line predates
/// the stock snapshot field, this sentinel stands in for the real stock count
/// until the backend re-validates at checkout.
pub const FALLBACK_STOCK_CEILING: u32 = 999;

/// Minimum password length accepted client-side.
///
/// ## Business Reason
/// Matches the backend's password policy so obviously-invalid input never
/// costs a network round-trip.
pub const MIN_PASSWORD_LENGTH: usize = 8;
