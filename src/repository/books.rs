//! Books repository: the process-wide library store.
//!
//! Records live in a `HashMap` keyed by id behind a single `RwLock`.
//! The id counter sits under the same lock, so assigning an id and
//! inserting the record happen as one step. Guards are never held
//! across an `.await`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

struct Library {
    books: HashMap<i64, Book>,
    next_id: i64,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            books: HashMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Clone, Default)]
pub struct BooksRepository {
    library: Arc<RwLock<Library>>,
}

fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Library>> {
        self.library
            .read()
            .map_err(|_| AppError::Internal("library lock poisoned (read)".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Library>> {
        self.library
            .write()
            .map_err(|_| AppError::Internal("library lock poisoned (write)".to_string()))
    }

    /// Store a new book, assigning its id and `added_at`
    pub fn create(&self, data: CreateBook) -> AppResult<Book> {
        let mut library = self.write()?;

        let id = library.next_id;
        library.next_id += 1;

        let book = Book::new(id, data, Utc::now());
        library.books.insert(id, book.clone());

        tracing::info!(book_id = id, title = %book.title, "Book added");
        Ok(book)
    }

    /// Mark a book as read, stamping `read_at` with the current time
    pub fn mark_read(&self, id: i64) -> AppResult<Book> {
        let mut library = self.write()?;
        let book = library.books.get_mut(&id).ok_or_else(not_found)?;

        // read_at never moves backwards, even if the wall clock does
        let now = Utc::now();
        let at = book.read_at.map_or(now, |previous| previous.max(now));
        book.mark_read(at);

        tracing::info!(book_id = id, "Book marked as read");
        Ok(book.clone())
    }

    /// Get a book by ID
    pub fn get_by_id(&self, id: i64) -> AppResult<Book> {
        tracing::debug!(book_id = id, "Fetching book");
        self.read()?.books.get(&id).cloned().ok_or_else(not_found)
    }

    /// Snapshot of every stored book, in no particular order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        let library = self.read()?;
        tracing::debug!(count = library.books.len(), "Listing books");
        Ok(library.books.values().cloned().collect())
    }

    /// Remove a book
    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.write()?.books.remove(&id).ok_or_else(not_found)?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Number of stored books
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.books.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}
