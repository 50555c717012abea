//! Catalog endpoints: books, authors, categories.
//!
//! Reads are public; writes require a bearer token with the admin role (the
//! backend enforces this; [`crate::storefront::Storefront`] additionally
//! gates admin flows client-side).

use bookstall_core::types::{
    Author, AuthorPayload, Book, BookPayload, Category, CategoryPayload, Page,
};

use super::ApiClient;
use crate::error::ClientResult;

// =============================================================================
// Book List Query
// =============================================================================

/// Query parameters for `GET /catalog/books/`.
///
/// All fields are optional; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct BookListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Free-text search over title/author.
    pub search: Option<String>,
    /// Filter by category id.
    pub category: Option<i64>,
    /// Filter by author id.
    pub author: Option<i64>,
    /// Server-side ordering key, e.g. "price" or "-pub_date".
    pub ordering: Option<String>,
}

impl BookListQuery {
    /// A query for a specific page with default filters.
    pub fn page(page: u32) -> Self {
        BookListQuery {
            page: Some(page),
            ..BookListQuery::default()
        }
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(author) = self.author {
            pairs.push(("author", author.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        pairs
    }
}

// =============================================================================
// Endpoints
// =============================================================================

impl ApiClient {
    /// `GET /catalog/books/` with search/filter/ordering parameters.
    pub async fn list_books(&self, query: &BookListQuery) -> ClientResult<Page<Book>> {
        self.get_json_with_query("/catalog/books/", &query.to_pairs())
            .await
    }

    /// `GET /catalog/books/:id/`
    pub async fn get_book(&self, id: i64) -> ClientResult<Book> {
        self.get_json(&format!("/catalog/books/{id}/")).await
    }

    /// `POST /catalog/books/` (admin)
    pub async fn create_book(&self, payload: &BookPayload) -> ClientResult<Book> {
        self.post_json("/catalog/books/", payload).await
    }

    /// `PATCH /catalog/books/:id/` (admin)
    pub async fn update_book(&self, id: i64, payload: &BookPayload) -> ClientResult<Book> {
        self.patch_json(&format!("/catalog/books/{id}/"), payload)
            .await
    }

    /// `DELETE /catalog/books/:id/` (admin)
    pub async fn delete_book(&self, id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("/catalog/books/{id}/")).await
    }

    /// `GET /catalog/authors/`
    pub async fn list_authors(&self, page: Option<u32>) -> ClientResult<Page<Author>> {
        self.get_json_with_query("/catalog/authors/", &page_pair(page))
            .await
    }

    /// `POST /catalog/authors/` (admin)
    pub async fn create_author(&self, payload: &AuthorPayload) -> ClientResult<Author> {
        self.post_json("/catalog/authors/", payload).await
    }

    /// `PATCH /catalog/authors/:id/` (admin)
    pub async fn update_author(&self, id: i64, payload: &AuthorPayload) -> ClientResult<Author> {
        self.patch_json(&format!("/catalog/authors/{id}/"), payload)
            .await
    }

    /// `DELETE /catalog/authors/:id/` (admin)
    pub async fn delete_author(&self, id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("/catalog/authors/{id}/")).await
    }

    /// `GET /catalog/categories/`
    pub async fn list_categories(&self, page: Option<u32>) -> ClientResult<Page<Category>> {
        self.get_json_with_query("/catalog/categories/", &page_pair(page))
            .await
    }

    /// `POST /catalog/categories/` (admin)
    pub async fn create_category(&self, payload: &CategoryPayload) -> ClientResult<Category> {
        self.post_json("/catalog/categories/", payload).await
    }

    /// `PATCH /catalog/categories/:id/` (admin)
    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> ClientResult<Category> {
        self.patch_json(&format!("/catalog/categories/{id}/"), payload)
            .await
    }

    /// `DELETE /catalog/categories/:id/` (admin)
    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("/catalog/categories/{id}/"))
            .await
    }
}

fn page_pair(page: Option<u32>) -> Vec<(&'static str, String)> {
    page.map(|p| vec![("page", p.to_string())]).unwrap_or_default()
}
