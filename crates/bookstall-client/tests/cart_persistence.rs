//! Cart durability across process restarts: every mutation is written
//! through to the backing file, and a fresh store over the same file sees
//! the identical line set.

mod common;

use std::sync::Arc;

use tempfile::tempdir;

use bookstall_client::storage::{FileStorage, KeyValueStorage};
use bookstall_client::stores::CartStore;
use bookstall_core::types::Book;

fn file_store(path: &std::path::Path) -> CartStore {
    common::init_tracing();
    CartStore::new(Arc::new(FileStorage::open(path)) as Arc<dyn KeyValueStorage>)
}

#[test]
fn test_cart_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store = file_store(&path);
        store.add_to_cart(&Book::sample(1, "Dune", "9.99", 5), 2);
        store.add_to_cart(&Book::sample(2, "Hyperion", "12.50", 4), 1);
    }

    // Simulated restart: new storage handle, new store, same file
    let reloaded = file_store(&path);
    let lines = reloaded.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].title, "Dune");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[1].title, "Hyperion");
    assert_eq!(reloaded.total_items(), 3);
    assert_eq!(reloaded.total_price().cents(), 999 * 2 + 1250);
}

#[test]
fn test_interrupted_session_loses_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    // Drop the store right after a single mutation; no explicit save step
    // exists, so the write must already be on disk.
    {
        let store = file_store(&path);
        store.add_to_cart(&Book::sample(7, "Solaris", "8.00", 9), 3);
    }

    let reloaded = file_store(&path);
    assert_eq!(reloaded.total_items(), 3);
    assert_eq!(reloaded.lines()[0].book_id, 7);
}

#[test]
fn test_removals_persist_too() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store = file_store(&path);
        store.add_to_cart(&Book::sample(1, "Dune", "9.99", 5), 2);
        store.add_to_cart(&Book::sample(2, "Hyperion", "12.50", 4), 1);
        store.update_quantity(2, 0); // zero deletes the line
    }

    let reloaded = file_store(&path);
    assert_eq!(reloaded.lines().len(), 1);
    assert_eq!(reloaded.lines()[0].book_id, 1);
}

#[test]
fn test_browse_add_adjust_remove_scenario() {
    let dir = tempdir().unwrap();
    let store = file_store(&dir.path().join("storage.json"));
    let book = Book::sample(1, "Dune", "9.99", 3);

    // Add two copies
    store.add_to_cart(&book, 2);
    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price().to_string(), "$19.98");

    // Ask for five more; only one more is in stock, so the line caps at 3
    store.add_to_cart(&book, 5);
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price().to_string(), "$29.97");

    // Remove the line entirely
    store.remove_from_cart(1);
    assert!(store.is_empty());
    assert!(store.total_price().is_zero());
}
