use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub page_count: Option<i64>,
    pub language: String,
}

/// Field-level changes for an existing book. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub page_count: Option<i64>,
    pub language: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.page_count.is_none()
            && self.language.is_none()
    }
}

impl Book {
    /// Merges the present fields of `patch` into this record. `book_id` is never touched.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(page_count) = patch.page_count {
            self.page_count = Some(page_count);
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}
