use crate::modules::books::core::book::{Book, BookPatch};
use crate::modules::books::core::errors::BookStoreError;
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored book, in insertion order.
    async fn list(&self) -> Vec<Book>;
    async fn create(&self, book: Book) -> Result<Book, BookStoreError>;
    async fn get(&self, book_id: i64) -> Result<Book, BookStoreError>;
    async fn update(&self, book_id: i64, patch: BookPatch) -> Result<Book, BookStoreError>;
    async fn delete(&self, book_id: i64) -> Result<(), BookStoreError>;
}
