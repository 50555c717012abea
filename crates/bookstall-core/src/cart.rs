//! # Cart Math
//!
//! Pure cart logic: merge-by-book, stock clamping, and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Operation               State Change          │
//! │  ─────────                ─────────               ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add(book, qty) ───────► merge or new line    │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity() ────► clamp or delete      │
//! │                                                                         │
//! │  Click remove ──────────► remove(book_id) ──────► delete line          │
//! │                                                                         │
//! │  Checkout success ──────► clear() ──────────────► empty cart           │
//! │                                                                         │
//! │  NOTE: every operation is infallible. Over-stock requests are silently │
//! │        capped, not rejected; the backend re-validates at checkout.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one [`CartLine`] per book id (adds merge by incrementing)
//! - A surviving line's quantity is always in `[1, stock snapshot]`
//! - A quantity clamped to zero or below deletes the line; a non-positive
//!   quantity is never stored
//! - Totals are recomputed on every read, never cached

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Book, OrderItem};
use crate::FALLBACK_STOCK_CEILING;

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct book selected for purchase.
///
/// ## Snapshot Semantics
/// Price, stock, and title are frozen at add-time so the cart can render
/// without re-fetching the catalog. Snapshots are NOT re-validated against
/// live data; the API is the source of truth at order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Book ID (unique key within the cart)
    pub book_id: i64,

    /// Quantity in cart, always >= 1
    pub quantity: u32,

    /// Price at time of adding (frozen decimal string, e.g. "9.99")
    pub unit_price: String,

    /// Stock at time of adding (frozen); `None` for lines persisted before
    /// the snapshot was captured
    pub stock: Option<u32>,

    /// Title at time of adding (frozen, for display)
    pub title: String,
}

impl CartLine {
    /// Creates a new cart line from a book, freezing its snapshots.
    fn from_book(book: &Book, quantity: u32) -> Self {
        CartLine {
            book_id: book.id,
            quantity,
            unit_price: book.price.clone(),
            stock: Some(book.stock),
            title: book.title.clone(),
        }
    }

    /// Ceiling used when clamping this line's quantity.
    fn stock_ceiling(&self) -> u32 {
        self.stock.unwrap_or(FALLBACK_STOCK_CEILING)
    }

    /// Unit price as [`Money`]. A snapshot that fails to parse counts as
    /// zero rather than poisoning the whole total.
    pub fn unit_price_money(&self) -> Money {
        self.unit_price.parse().unwrap_or(Money::zero())
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price_money().multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The ordered collection of all cart lines for the current browser profile.
///
/// The cart is not tied to a user identity; it persists independent of login
/// state. All operations are pure, synchronous, and infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from persisted lines, dropping any line that violates
    /// the quantity invariant.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart {
            lines: lines.into_iter().filter(|l| l.quantity >= 1).collect(),
        }
    }

    /// Adds a book to the cart, merging with an existing line for the same
    /// book id.
    ///
    /// ## Behavior
    /// - Existing line: new quantity = `min(existing + quantity, book.stock)`
    /// - New line: quantity = `min(quantity, book.stock)`
    /// - A result of zero (out-of-stock book) deletes the line instead of
    ///   storing quantity 0
    ///
    /// Requests beyond available stock are silently capped, never rejected.
    pub fn add(&mut self, book: &Book, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.book_id == book.id) {
            let merged = line.quantity.saturating_add(quantity).min(book.stock);
            if merged == 0 {
                self.lines.retain(|l| l.book_id != book.id);
            } else {
                line.quantity = merged;
            }
            return;
        }

        let clamped = quantity.min(book.stock);
        if clamped > 0 {
            self.lines.push(CartLine::from_book(book, clamped));
        }
    }

    /// Sets the quantity for a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove`]
    /// - Otherwise: quantity = `min(quantity, stock snapshot)`, falling back
    ///   to [`FALLBACK_STOCK_CEILING`] when no snapshot is available
    /// - Unknown book id: no-op
    pub fn update_quantity(&mut self, book_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(book_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.book_id == book_id) {
            let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
            line.quantity = requested.min(line.stock_ceiling());
        }
    }

    /// Removes a line by book id. A missing line is a no-op, not an error.
    pub fn remove(&mut self, book_id: i64) {
        self.lines.retain(|l| l.book_id != book_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct books in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines. Recomputed on every call.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal across all lines (Σ quantity × unit price). Recomputed on
    /// every call.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Projects the cart into the order-submission payload.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem::new(l.book_id, l.quantity))
            .collect()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_items: u32,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Book;

    fn dune() -> Book {
        Book::sample(1, "Dune", "9.99", 3)
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().cents(), 1998);
    }

    #[test]
    fn test_add_merges_by_book_id() {
        let mut cart = Cart::new();
        cart.add(&dune(), 1);
        cart.add(&dune(), 1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_clamps_to_stock() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);
        // 2 + 5 exceeds stock of 3 -> clamps to 3
        cart.add(&dune(), 5);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().cents(), 2997);
    }

    #[test]
    fn test_merge_invariant_over_sequence() {
        // min(sum(qi), stock) with exactly one line, regardless of split
        let mut cart = Cart::new();
        for q in [1, 1, 1, 4] {
            cart.add(&dune(), q);
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_out_of_stock_book_stores_nothing() {
        let mut cart = Cart::new();
        cart.add(&Book::sample(9, "Sold Out", "4.50", 0), 1);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_to_snapshot() {
        let mut cart = Cart::new();
        cart.add(&dune(), 1);
        cart.update_quantity(1, 10);

        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);
        cart.update_quantity(1, 0);

        assert!(cart.is_empty());

        cart.add(&dune(), 2);
        cart.update_quantity(1, -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_book_is_noop() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);
        cart.update_quantity(42, 1);

        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_update_quantity_fallback_ceiling() {
        // A line with no stock snapshot clamps to the sentinel ceiling
        let mut cart = Cart::from_lines(vec![CartLine {
            book_id: 5,
            quantity: 1,
            unit_price: "1.00".to_string(),
            stock: None,
            title: "Legacy".to_string(),
        }]);
        cart.update_quantity(5, 5000);

        assert_eq!(cart.total_items(), FALLBACK_STOCK_CEILING);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.remove(99);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_scenario_add_clamp_remove() {
        // Storefront walk-through: add 2, add 5 (clamps), remove
        let mut cart = Cart::new();
        let book = Book::sample(1, "X", "9.99", 3);

        cart.add(&book, 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_price().to_string(), "$19.98");

        cart.add(&book, 5);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().to_string(), "$29.97");

        cart.remove(1);
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_totals_never_stale() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);
        let before = cart.total_price();
        cart.update_quantity(1, 1);

        assert_ne!(cart.total_price(), before);
        assert_eq!(cart.total_price().cents(), 999);
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let cart = Cart::from_lines(vec![CartLine {
            book_id: 2,
            quantity: 3,
            unit_price: "not-a-price".to_string(),
            stock: Some(10),
            title: "Broken".to_string(),
        }]);

        assert_eq!(cart.total_price(), Money::zero());
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_from_lines_drops_zero_quantity() {
        let cart = Cart::from_lines(vec![CartLine {
            book_id: 3,
            quantity: 0,
            unit_price: "1.00".to_string(),
            stock: Some(1),
            title: "Ghost".to_string(),
        }]);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_items_projection() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);
        cart.add(&Book::sample(2, "Hyperion", "12.50", 5), 1);

        let items = cart.order_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].book, 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].book, 2);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&dune(), 2);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price.cents(), 1998);
    }
}
