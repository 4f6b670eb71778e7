// In memory implementation of the BookRepository port.
//
// Purpose
// - Hold the book collection for the lifetime of the process.
//
// Responsibilities
// - Keep books in insertion order and look them up by linear scan.
// - Reject duplicate ids on create. Ids are never re-checked on update.
// - Serialize writers behind a single lock so every operation is atomic.

use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::core::book::{Book, BookPatch};
use crate::modules::books::core::errors::BookStoreError;
use crate::modules::books::core::seed::seed_books;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    async fn create(&self, book: Book) -> Result<Book, BookStoreError> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.book_id == book.book_id) {
            warn!(book_id = book.book_id, "rejected book with duplicate id");
            return Err(BookStoreError::Conflict {
                book_id: book.book_id,
            });
        }
        books.push(book.clone());
        info!(book_id = book.book_id, total = books.len(), "book created");
        Ok(book)
    }

    async fn get(&self, book_id: i64) -> Result<Book, BookStoreError> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.book_id == book_id)
            .cloned()
            .ok_or(BookStoreError::NotFound { book_id })
    }

    async fn update(&self, book_id: i64, patch: BookPatch) -> Result<Book, BookStoreError> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.book_id == book_id)
            .ok_or(BookStoreError::NotFound { book_id })?;
        if patch.is_empty() {
            debug!(book_id, "empty patch, nothing to update");
        }
        book.apply(patch);
        info!(book_id, "book updated");
        Ok(book.clone())
    }

    async fn delete(&self, book_id: i64) -> Result<(), BookStoreError> {
        let mut books = self.books.write().await;
        let position = books
            .iter()
            .position(|b| b.book_id == book_id)
            .ok_or(BookStoreError::NotFound { book_id })?;
        books.remove(position);
        info!(book_id, total = books.len(), "book deleted");
        Ok(())
    }
}
