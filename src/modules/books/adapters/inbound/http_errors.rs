use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::modules::books::core::errors::BookStoreError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for BookStoreError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            BookStoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "Book not found"),
            BookStoreError::Conflict { .. } => {
                (StatusCode::BAD_REQUEST, "Book with this ID already exists.")
            }
        };
        (
            status,
            Json(ErrorResponse {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}
