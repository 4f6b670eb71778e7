use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookStoreError {
    #[error("book {book_id} not found")]
    NotFound { book_id: i64 },

    #[error("book {book_id} already exists")]
    Conflict { book_id: i64 },
}
