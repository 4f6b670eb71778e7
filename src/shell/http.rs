use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::books::use_cases::create_book::inbound::http as create_http;
use crate::modules::books::use_cases::delete_book::inbound::http as delete_http;
use crate::modules::books::use_cases::get_book::inbound::http as get_http;
use crate::modules::books::use_cases::list_books::inbound::http as list_http;
use crate::modules::books::use_cases::update_book::inbound::http as update_http;
use crate::modules::parameters::inbound::http as parameters_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(parameters_http::routes())
        .route("/books", get(list_http::handle).post(create_http::handle))
        .route(
            "/book/{book_id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
