use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::config::ServerConfig;
use api::routes;
use api::state::AppState;
use estate::seed;
use estate::storage::MemStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting API service");

    // Load the showcase catalog into the in-memory store
    let storage = MemStorage::new();
    seed::load_sample_listings(&storage).await;

    let app_state = AppState { storage };

    // Start the web server
    let app = routes::create_router(app_state);

    let config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("API service listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
