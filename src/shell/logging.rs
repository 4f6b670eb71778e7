use tracing_subscriber::{EnvFilter, fmt};

/// Respects `RUST_LOG` when set, otherwise logs requests and store mutations at `info`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
}
