//! In-memory book store
//!
//! Stands in for a database: a shared map guarded by an RwLock. Single
//! operations are atomic with respect to each other; concurrent writes to
//! the same id are last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<HashMap<Uuid, Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all books ordered by title ascending, ties broken by id
    pub async fn list(&self) -> Vec<Book> {
        let books = self.books.read().await;
        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a new book
    pub async fn add(&self, book: Book) {
        self.books.write().await.insert(book.id, book);
    }

    /// Replace an existing book record
    pub async fn update(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if !books.contains_key(&book.id) {
            return Err(AppError::NotFound(format!("Book {} not found", book.id)));
        }
        books.insert(book.id, book.clone());
        Ok(book)
    }

    /// Remove a book by ID
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        self.books
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(title: &str) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: "Author".to_string(),
            year: 2000,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_ordered_by_title() {
        let repo = BooksRepository::new();
        repo.add(book("Refactoring")).await;
        repo.add(book("Clean Architecture")).await;
        repo.add(book("Domain-Driven Design")).await;

        let titles: Vec<String> = repo.list().await.into_iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            ["Clean Architecture", "Domain-Driven Design", "Refactoring"]
        );
    }

    #[tokio::test]
    async fn test_list_ties_broken_by_id() {
        let repo = BooksRepository::new();
        let first = book("Same Title");
        let second = book("Same Title");
        repo.add(first.clone()).await;
        repo.add(second.clone()).await;

        let mut expected = vec![first.id, second.id];
        expected.sort();
        let ids: Vec<Uuid> = repo.list().await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown() {
        let repo = BooksRepository::new();
        assert!(matches!(
            repo.get_by_id(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown() {
        let repo = BooksRepository::new();
        assert!(matches!(
            repo.update(book("Ghost")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let repo = BooksRepository::new();
        let b = book("Ephemeral");
        let id = b.id;
        repo.add(b).await;

        assert!(repo.remove(id).await.is_ok());
        assert!(matches!(
            repo.remove(id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(repo.count().await, 0);
    }
}
