use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::books::core::book::{Book, DEFAULT_LANGUAGE};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateBookBody {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub page_count: Option<i64>,
    pub language: Option<String>,
}

impl From<CreateBookBody> for Book {
    fn from(body: CreateBookBody) -> Self {
        Book {
            book_id: body.book_id,
            title: body.title,
            author: body.author,
            page_count: body.page_count,
            language: body
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateBookBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.books.create(body.into()).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => e.into_response(),
    }
}
