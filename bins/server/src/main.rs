//! Hearth API Server
//!
//! Main entry point for the Hearth family loan tracker backend.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth_api::{AppState, create_router};
use hearth_core::SessionStore;
use hearth_db::connect;
use hearth_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Sessions live in-process; a restart logs every household out
    let session_ttl = Duration::from_secs(config.session.ttl_secs);
    let sessions = SessionStore::new(session_ttl);
    info!(ttl_secs = config.session.ttl_secs, "Session store ready");

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        sessions: Arc::new(sessions),
        session_ttl,
        cookie_secure: config.session.cookie_secure,
    };

    // Create router
    let app = create_router(state, config.server.static_dir.as_deref());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
