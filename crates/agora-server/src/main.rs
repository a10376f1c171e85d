//! # Agora Server
//!
//! Main binary: loads config, connects to PostgreSQL, runs migrations,
//! optionally seeds the default communities, and serves the REST API.

use agora_api::{build_router, AppState};
use agora_db::{seed, Database};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = agora_common::config::init()?;

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agora=debug,tower_http=debug".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Agora v{}", env!("CARGO_PKG_VERSION"));

    // Connect to the database
    let db = Database::connect(config).await?;

    // Run migrations
    db.migrate().await?;

    // Seed default communities on startup if configured; otherwise just
    // report readiness so operators know to hit POST /api/v1/init.
    if config.seed.on_startup {
        let inserted = seed::initialize_defaults(&db.pool).await?;
        tracing::info!(inserted, "Startup seeding complete");
    } else if !seed::check_initialization(&db.pool).await? {
        tracing::warn!("Default communities missing — POST /api/v1/init to seed them");
    }

    let state = AppState {
        db,
        default_community: config.seed.auto_join_community.clone(),
    };
    let router = build_router(state);
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    tracing::info!("REST API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
