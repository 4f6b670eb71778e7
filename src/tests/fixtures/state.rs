use crate::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryBookStore::seeded()))
}

pub fn make_empty_state() -> AppState {
    AppState::new(Arc::new(InMemoryBookStore::new()))
}
