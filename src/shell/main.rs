use std::sync::Arc;

use books_api::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookStore;
use books_api::shell::config::AppConfig;
use books_api::shell::http::router;
use books_api::shell::logging::init_logging;
use books_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryBookStore::seeded());
    tracing::info!(books = store.len().await, "book store seeded");

    let app = router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
