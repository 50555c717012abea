//! # bookstall-client: Side-Effecting Layer of the Bookstall Storefront
//!
//! Everything that touches the outside world lives here: the HTTP client for
//! the bookstore REST API, the durable key-value storage analog, and the two
//! stateful stores (cart and session) that the UI shell reads from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookstall Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (out of scope)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ bookstall-client (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌─────────────┐   ┌──────────────────────┐  │   │
//! │  │   │ Storefront │──►│ CartStore   │   │ ApiClient (api/)     │  │   │
//! │  │   │ (facade)   │   │ SessionStore│──►│ auth/catalog/orders/ │  │   │
//! │  │   └────────────┘   └──────┬──────┘   │ profile endpoints    │  │   │
//! │  │                           │          └──────────────────────┘  │   │
//! │  │                           ▼                                     │   │
//! │  │          KeyValueStorage: file-backed or in-memory             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         bookstall-core: pure types, cart math, session FSM     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP client and the `SessionApi`/`OrderApi` seams
//! - [`stores`] - [`stores::CartStore`] and [`stores::SessionStore`]
//! - [`storefront`] - One-stop facade plus checkout and admin gating
//! - [`storage`] - `KeyValueStorage` trait with file and memory backends
//! - [`config`] - Base URL resolution (env var or default)
//! - [`error`] - [`error::ClientError`] covering transport, API, and policy failures
//! - [`mocks`] - Stateful mock API for tests
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookstall_client::config::ClientConfig;
//! use bookstall_client::storage::FileStorage;
//! use bookstall_client::storefront::Storefront;
//!
//! # async fn run() {
//! let storage = Arc::new(FileStorage::open("bookstall.json"));
//! let storefront = Storefront::new(&ClientConfig::from_env(), storage);
//! storefront.initialize().await;
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod mocks;
pub mod storage;
pub mod storefront;
pub mod stores;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use api::{ApiClient, BookListQuery, OrderApi, SessionApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use storefront::Storefront;
pub use stores::{CartStore, SessionStore};
