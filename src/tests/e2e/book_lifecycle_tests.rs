use crate::modules::books::adapters::outbound::book_repository::BookRepository;
use crate::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookStore;
use crate::modules::books::core::book::{Book, BookPatch};
use crate::modules::books::core::errors::BookStoreError;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::book::BookBuilder;
use crate::tests::fixtures::http::read_json;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn walks_a_book_through_its_lifecycle_over_http() {
    let store = Arc::new(InMemoryBookStore::seeded());
    let app = router(AppState::new(store.clone()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/books",
            r#"{"book_id":6,"title":"Dune","author":"Frank Herbert"}"#.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Book = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(created.language, "English");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/book/6"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Book = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(fetched, created);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/book/6",
            r#"{"page_count":412}"#.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Book = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(
        updated,
        Book {
            page_count: Some(412),
            ..created
        }
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/books"))
        .await
        .unwrap();
    let listed: Vec<Book> = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(listed.len(), 6);
    assert_eq!(listed.last(), Some(&updated));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/book/6"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", "/book/6"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 5);
}

#[tokio::test]
async fn list_reflects_every_prior_mutation_in_insertion_order() {
    let store = InMemoryBookStore::seeded();

    store
        .create(BookBuilder::new().book_id(7).title("Neuromancer").build())
        .await
        .unwrap();
    store
        .create(BookBuilder::new().book_id(6).build())
        .await
        .unwrap();
    store.delete(3).await.unwrap();
    store
        .update(
            7,
            BookPatch {
                author: Some("William Gibson".into()),
                ..BookPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        store.create(BookBuilder::new().book_id(5).build()).await,
        Err(BookStoreError::Conflict { book_id: 5 })
    );

    let books = store.list().await;
    let ids: Vec<i64> = books.iter().map(|b| b.book_id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 7, 6]);
    assert_eq!(books[4].author, "William Gibson");
    assert_eq!(books[4].title, "Neuromancer");
}

#[tokio::test]
async fn a_deleted_id_can_be_created_again_at_the_end() {
    let store = InMemoryBookStore::seeded();
    let original = store.get(1).await.unwrap();

    store.delete(1).await.unwrap();
    store.create(original.clone()).await.unwrap();

    let books = store.list().await;
    assert_eq!(books.len(), 5);
    assert_eq!(books.last(), Some(&original));
}
