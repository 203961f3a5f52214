//! Currency Converter API Server
//!
//! Main entry point for the currency converter service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_api::{AppState, create_router};
use converter_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "converter_api=debug,converter_server=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the static rate table and application state
    let state = AppState::new();
    info!(
        bases = state.rates.base_currencies().len(),
        "Rate table loaded"
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Currency converter server running on port {}",
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
