//! # Stores
//!
//! The two cooperating, independent client-side stores.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐              ┌──────────────────────────────┐     │
//! │  │    CartStore     │              │        SessionStore          │     │
//! │  │                  │              │                              │     │
//! │  │  Mutex<Cart>     │              │  RwLock<SessionState>        │     │
//! │  │  local only,     │              │  proxies login/register/     │     │
//! │  │  persists every  │              │  logout to the API, mirrors  │     │
//! │  │  mutation        │              │  resulting identity          │     │
//! │  └────────┬─────────┘              └──────────────┬───────────────┘     │
//! │           │                                       │                     │
//! │           └──────────────┬────────────────────────┘                     │
//! │                          ▼                                              │
//! │           KeyValueStorage (disjoint, namespaced keys)                   │
//! │                                                                         │
//! │  The stores share no transactional boundary: checkout reads each        │
//! │  independently (see storefront.rs).                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both stores are dependency-injected (constructed with their storage and
//! API handles) rather than ambient singletons, so tests instantiate
//! isolated instances per case.

mod cart;
mod session;

pub use cart::CartStore;
pub use session::SessionStore;
