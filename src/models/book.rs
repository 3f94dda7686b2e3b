//! Book entity and its request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::link::Link;

/// Book record as kept in the store
#[derive(Debug, Clone)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Set at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
    /// Set on every successful update, absent until the first one
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create book request
///
/// `title` and `author` are optional at the wire level so that a missing
/// field goes through domain validation (400 with a field message) instead
/// of failing JSON deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub year: i32,
}

/// Update book request; replaces title, author and year as a whole
#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub year: i32,
}

/// List query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// One page of books, produced by the service layer
#[derive(Debug)]
pub struct BookPage {
    pub items: Vec<Book>,
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Book response DTO with hypermedia links
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: Option<DateTime<Utc>>,
    pub links: Vec<Link>,
}

impl BookResponse {
    pub fn from_entity(book: &Book, links: Vec<Link>) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            created_at_utc: book.created_at,
            updated_at_utc: book.updated_at,
            links,
        }
    }
}

/// Paginated collection envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<BookResponse>,
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub links: Vec<Link>,
}
