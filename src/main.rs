use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_registry_api::app::build_app;
use lead_registry_api::config::Config;
use lead_registry_api::handlers::AppState;
use lead_registry_api::store::LeadStore;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the seeded in-memory
/// store, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_registry_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Build the store and seed the demo leads
    let store = LeadStore::seeded();
    tracing::info!("Lead store seeded with {} demo leads", store.len());

    let app_state = Arc::new(AppState { store });
    let app = build_app(app_state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
