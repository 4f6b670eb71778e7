use crate::modules::books::core::book::{Book, DEFAULT_LANGUAGE};

fn book(book_id: i64, title: &str, author: &str, page_count: i64, language: &str) -> Book {
    Book {
        book_id,
        title: title.to_string(),
        author: author.to_string(),
        page_count: Some(page_count),
        language: language.to_string(),
    }
}

/// The records every fresh store starts with, in insertion order.
pub fn seed_books() -> Vec<Book> {
    vec![
        book(1, "Atomic Habits", "James Clear", 320, DEFAULT_LANGUAGE),
        book(2, "Sapiens", "Yuval Noah Harari", 498, DEFAULT_LANGUAGE),
        book(3, "The Alchemist", "Paulo Coelho", 208, "Portuguese"),
        book(4, "Ikigai", "Héctor García", 194, "Japanese"),
        book(5, "Zero to One", "Peter Thiel", 224, DEFAULT_LANGUAGE),
    ]
}
