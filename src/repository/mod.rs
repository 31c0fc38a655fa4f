//! Repository layer for the in-memory library store

pub mod books;

/// Main repository struct shared by all handlers
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
