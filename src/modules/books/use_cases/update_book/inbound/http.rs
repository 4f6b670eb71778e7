use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::books::core::book::BookPatch;
use crate::shell::state::AppState;

/// Unknown keys, `book_id` included, are ignored.
#[derive(Deserialize)]
pub struct UpdateBookBody {
    pub title: Option<String>,
    pub author: Option<String>,
    pub page_count: Option<i64>,
    pub language: Option<String>,
}

impl From<UpdateBookBody> for BookPatch {
    fn from(body: UpdateBookBody) -> Self {
        BookPatch {
            title: body.title,
            author: body.author,
            page_count: body.page_count,
            language: body.language,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateBookBody>, JsonRejection>,
) -> impl IntoResponse {
    let Path(book_id) = match book_id {
        Ok(id) => id,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.books.update(book_id, body.into()).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => e.into_response(),
    }
}
