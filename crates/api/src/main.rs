use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use panelcast_api::config::ServerConfig;
use panelcast_api::router::build_app_router;
use panelcast_api::state::AppState;
use panelcast_store::{HttpStore, MemoryStore, RecordStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panelcast_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Record store ---
    let store: Arc<dyn RecordStore> = match config.store_url.as_deref() {
        Some(url) => {
            tracing::info!(url, "Using hosted record store");
            Arc::new(HttpStore::new(url))
        }
        None => {
            tracing::warn!(
                "STORE_URL not set; using in-memory record store (data is not persisted)"
            );
            Arc::new(MemoryStore::new())
        }
    };

    // --- App state / router ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
