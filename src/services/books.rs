//! Book service: validation, pagination and CRUD logic

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPage, CreateBook, ListBooksQuery, UpdateBook},
    repository::Repository,
};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List one page of books ordered by title
    ///
    /// Out-of-range paging inputs are normalized, never rejected: page is
    /// clamped to [1, total_pages] and a pageSize outside [1, 100] silently
    /// resets to the default of 10. `total_pages` is at least 1 even for an
    /// empty store.
    pub async fn list(&self, query: &ListBooksQuery) -> BookPage {
        let mut page = query.page.unwrap_or(1).max(1);
        let page_size = match query.page_size {
            Some(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
            _ => DEFAULT_PAGE_SIZE,
        };

        let total_count = self.repository.books.count().await as i64;
        let total_pages = ((total_count + page_size - 1) / page_size).max(1);
        if page > total_pages {
            page = total_pages;
        }

        let offset = ((page - 1) * page_size) as usize;
        let items: Vec<Book> = self
            .repository
            .books
            .list()
            .await
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        BookPage {
            items,
            page,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let (title, author) = validate_fields(&data.title, &data.author)?;

        let book = Book {
            id: Uuid::new_v4(),
            title,
            author,
            year: data.year,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.repository.books.add(book.clone()).await;

        tracing::info!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Replace title, author and year of an existing book
    ///
    /// Existence is checked before the body is validated, so an invalid
    /// payload against an unknown id yields 404, not 400.
    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let mut book = self.repository.books.get_by_id(id).await?;

        let (title, author) = validate_fields(&data.title, &data.author)?;

        book.title = title;
        book.author = author;
        book.year = data.year;
        book.updated_at = Some(Utc::now());
        self.repository.books.update(book).await
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.remove(id).await?;
        tracing::info!(%id, "book deleted");
        Ok(())
    }
}

/// Check required fields in order (title first) and return them trimmed
fn validate_fields(
    title: &Option<String>,
    author: &Option<String>,
) -> AppResult<(String, String)> {
    let title = required_field(title, "Title")?;
    let author = required_field(author, "Author")?;
    Ok((title, author))
}

fn required_field(value: &Option<String>, name: &str) -> AppResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{} is required.", name)))
}
