//! Repository layer for store operations

pub mod books;

/// Main repository struct holding the backing stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
