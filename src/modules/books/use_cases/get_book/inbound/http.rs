use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(book_id) = match book_id {
        Ok(id) => id,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.books.get(book_id).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => e.into_response(),
    }
}
