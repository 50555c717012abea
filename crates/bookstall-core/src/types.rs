//! # Domain Types
//!
//! Wire-level types shared by every layer of the client.
//!
//! ## Serialization Contract
//! Field names are snake_case exactly as the bookstore API emits them
//! (`first_name`, `pub_date`, `total_amount`), so the serde defaults apply
//! with no rename attributes. Prices cross the wire as decimal strings and
//! are only converted to [`crate::Money`] by cart math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Users & Authentication
// =============================================================================

/// Account role. `Admin` is the sole gate for admin-only operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl Role {
    /// Wire representation, as persisted alongside the tokens.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Parses the persisted wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// A full user profile as returned by `GET /profile/users/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Credentials submitted to `POST /auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Response from `POST /auth/login/`: identity hints plus the token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
    /// Bearer access token, attached to subsequent requests.
    pub access: String,
    /// Refresh token, surrendered to the API on logout.
    pub refresh: String,
}

/// Payload for `POST /auth/register/`.
///
/// Registration does not establish a session; no token is issued as a side
/// effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

// =============================================================================
// Catalog
// =============================================================================

/// An author record under `/catalog/authors/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

/// A category record under `/catalog/categories/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A book record under `/catalog/books/`.
///
/// `author` and `category` are foreign-key ids; the `*_name` fields are
/// denormalized read-side extras the API includes on list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Decimal string, e.g. "9.99". Parsed by cart math, never stored as float.
    pub price: String,
    pub stock: u32,
    pub pub_date: String,
    pub author: i64,
    pub category: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl Book {
    /// Builds a minimal book for tests and examples.
    pub fn sample(id: i64, title: &str, price: &str, stock: u32) -> Self {
        Book {
            id,
            title: title.to_string(),
            description: None,
            price: price.to_string(),
            stock,
            pub_date: "2024-01-01".to_string(),
            author: 1,
            category: 1,
            author_name: None,
            category_name: None,
        }
    }
}

/// Fields accepted when creating or patching a book (admin console).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
}

/// Fields accepted when creating or patching an author (admin console).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

/// Fields accepted when creating or patching a category (admin console).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial user fields for `PATCH /profile/users/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

// =============================================================================
// Orders
// =============================================================================

/// Order lifecycle states, owned entirely by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Canceled,
}

/// One line of an order. On submission only `book` and `quantity` are sent;
/// the API echoes back the id, captured price, and title on reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub book: i64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
}

impl OrderItem {
    /// Builds the submission form of a line: book id and quantity only.
    pub fn new(book: i64, quantity: u32) -> Self {
        OrderItem {
            id: None,
            book,
            quantity,
            price: None,
            book_title: None,
        }
    }
}

/// An order as returned by `/orders/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// Decimal string computed server-side; the client never recomputes it.
    pub total_amount: String,
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Envelopes
// =============================================================================

/// The API's pagination envelope for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Plain `{"message": "..."}` acknowledgements (password endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("customer"), Some(Role::Customer));
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
    }

    #[test]
    fn test_order_item_submission_shape() {
        // The create-order payload must contain exactly book and quantity
        let item = OrderItem::new(7, 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"book": 7, "quantity": 2}));
    }

    #[test]
    fn test_book_deserializes_api_shape() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Dune",
            "price": "9.99",
            "stock": 3,
            "pub_date": "1965-08-01",
            "author": 4,
            "category": 2,
            "author_name": "Frank Herbert"
        });
        let book: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book.stock, 3);
        assert_eq!(book.author_name.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.description, None);
    }

    #[test]
    fn test_page_envelope() {
        let json = serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 1, "name": "Fiction"}]
        });
        let page: Page<Category> = serde_json::from_value(json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].name, "Fiction");
    }
}
