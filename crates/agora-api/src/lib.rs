//! # agora-api
//!
//! REST API layer for Agora. Provides HTTP endpoints for the community
//! directory, the membership ledger, user registration, and bootstrap
//! seeding.

pub mod routes;

use agora_db::Database;
use axum::Router;
use std::sync::Arc;

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Community every new registration is auto-joined to (best effort).
    pub default_community: String,
}

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(routes::communities::router())
        .merge(routes::users::router())
        .merge(routes::init::router())
        .merge(routes::health::router());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::compression::CompressionLayer::new())
        .with_state(Arc::new(state))
}
