// Handlers showing the ways request data reaches an endpoint: path segments,
// query strings (required and optional), a JSON body, and request headers.
// None of them touch application state, so the router is generic over it.

use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Harshit";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Deserialize)]
pub struct NameParams {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AgeParams {
    pub age: i64,
}

#[derive(Deserialize)]
pub struct OptionalParams {
    pub name: Option<String>,
    pub age: Option<i64>,
}

#[derive(Deserialize)]
pub struct EchoBookBody {
    pub book_id: i64,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct EchoBookResponse {
    #[serde(rename = "Book Id")]
    pub book_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct HeadersResponse {
    #[serde(rename = "Accept")]
    pub accept: Option<String>,
    #[serde(rename = "Content-Type")]
    pub content_type: Option<String>,
    #[serde(rename = "User-Agent")]
    pub user_agent: Option<String>,
    #[serde(rename = "Host")]
    pub host: Option<String>,
}

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/path-parameter/{name}", get(path_parameter))
        .route("/query-parameter", get(query_parameter))
        .route("/path-with-query-parameter/{name}", get(path_with_query))
        .route("/optional-query-parameter", get(optional_query))
        .route("/create-book", post(echo_book))
        .route("/get-headers", get(request_headers))
}

/// Doubles as a liveness check.
pub async fn root() -> Json<MessageResponse> {
    MessageResponse::json("Welcome to the FastAPI demo!")
}

pub async fn path_parameter(name: Result<Path<String>, PathRejection>) -> impl IntoResponse {
    let Path(name) = match name {
        Ok(n) => n,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    MessageResponse::json(format!("Hello {name}! (from path parameter)")).into_response()
}

pub async fn query_parameter(
    params: Result<Query<NameParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    MessageResponse::json(format!("Hello {}! (from query parameter)", params.name)).into_response()
}

pub async fn path_with_query(
    Path(name): Path<String>,
    params: Result<Query<AgeParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    MessageResponse::json(format!("Name: {name} (path) & Age: {} (query)", params.age))
        .into_response()
}

pub async fn optional_query(
    params: Result<Query<OptionalParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let name = params.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    let age = params.age.unwrap_or(0);
    MessageResponse::json(format!("Name: {name} & Age: {age}")).into_response()
}

pub async fn echo_book(body: Result<Json<EchoBookBody>, JsonRejection>) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    Json(EchoBookResponse {
        book_id: body.book_id,
        title: body.title,
        author: body.author,
    })
    .into_response()
}

pub async fn request_headers(headers: HeaderMap) -> Json<HeadersResponse> {
    let value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    Json(HeadersResponse {
        accept: value(header::ACCEPT),
        content_type: value(header::CONTENT_TYPE),
        user_agent: value(header::USER_AGENT),
        host: value(header::HOST),
    })
}
