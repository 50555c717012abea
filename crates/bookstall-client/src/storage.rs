//! # Durable Client Storage
//!
//! The localStorage analog: a small string key-value namespace that survives
//! restarts.
//!
//! ## Shared-Resource Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Namespace                                    │
//! │                                                                         │
//! │  One shared namespace, disjoint keys by convention:                     │
//! │                                                                         │
//! │   CartStore ──────► bookstall.cart            (versioned JSON blob)    │
//! │   SessionStore ───► bookstall.access_token                             │
//! │                     bookstall.refresh_token                            │
//! │                     bookstall.user_role                                │
//! │                     bookstall.username                                 │
//! │                                                                         │
//! │  Nothing enforces disjointness structurally; the `keys` module is the  │
//! │  single place keys are defined.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! A read failure (missing or corrupt file) degrades to "no prior state" and
//! is never propagated to the user. Write failures are returned as
//! [`StorageError`] so the stores can log and keep operating memory-only.
//!
//! ## Known Limitation
//! Two processes writing the same file clobber each other, last write wins.
//! There is no cross-process reconciliation; single-session use is assumed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// Keys
// =============================================================================

/// Storage keys, namespaced per store by convention.
pub mod keys {
    /// Serialized cart snapshot (owned by the Cart Store).
    pub const CART: &str = "bookstall.cart";
    /// Bearer access token (owned by the Session Store).
    pub const ACCESS_TOKEN: &str = "bookstall.access_token";
    /// Refresh token, surrendered on logout (owned by the Session Store).
    pub const REFRESH_TOKEN: &str = "bookstall.refresh_token";
    /// Last-known role, trusted provisionally at startup.
    pub const USER_ROLE: &str = "bookstall.user_role";
    /// Last-known username, trusted provisionally at startup.
    pub const USERNAME: &str = "bookstall.username";
}

// =============================================================================
// Error
// =============================================================================

/// Storage I/O failure. Non-fatal by policy: callers log it and continue with
/// in-memory state as the effective truth.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the backing file failed.
    #[error("Failed to write storage file: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the key-value map failed.
    #[error("Failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Trait
// =============================================================================

/// Durable string key-value storage, mirroring the localStorage contract.
///
/// Implementations must be cheap to call from synchronous store mutations;
/// every write is a full re-persist of the caller's value.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File-Backed Storage
// =============================================================================

/// File-backed storage: one JSON object per profile, loaded once at open and
/// rewritten in full on every mutation (last write wins).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    map: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens storage at `path`, loading any existing contents.
    ///
    /// A missing file means a fresh profile; a corrupt file is logged and
    /// treated as empty rather than surfaced to the user.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = Self::load(&path);
        FileStorage {
            path,
            map: Mutex::new(map),
        }
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No prior storage file, starting empty");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt storage file, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn flush(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.lock().expect("storage mutex poisoned");
        map.insert(key.to_string(), value.to_string());
        self.flush(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map.lock().expect("storage mutex poisoned");
        if map.remove(key).is_some() {
            self.flush(&map)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// In-memory storage for tests: the contract without the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Seeds a key before the store under test opens.
    pub fn seed(&self, key: &str, value: &str) {
        self.map
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.map.lock().expect("storage mutex poisoned").len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map.lock().expect("storage mutex poisoned").remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
