//! Bootstrap endpoints — trigger default-community seeding and probe
//! whether it has run.
//!
//! These two handlers keep their own fixed wire shape
//! (`{ success, message }` / `{ initialized, message }`, failures as
//! HTTP 500 `{ error, details }`) instead of the shared error envelope,
//! since deployment tooling scripts against it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use agora_db::seed;
use std::sync::Arc;

use crate::AppState;

/// Bootstrap routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/init", get(check_init).post(run_init))
}

fn init_failure(error: &str, details: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error,
            "details": details.to_string(),
        })),
    )
        .into_response()
}

/// POST /api/v1/init — Seed the default communities (idempotent).
async fn run_init(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("Seeding default communities...");

    match seed::initialize_defaults(&state.db.pool).await {
        Ok(inserted) => {
            tracing::info!(inserted, "Default community seeding complete");
            Json(serde_json::json!({
                "success": true,
                "message": format!("Initialized with default communities ({inserted} inserted)"),
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Default community seeding failed");
            init_failure("Initialization failed", e)
        }
    }
}

/// GET /api/v1/init — Readiness probe for the default communities.
async fn check_init(State(state): State<Arc<AppState>>) -> Response {
    match seed::check_initialization(&state.db.pool).await {
        Ok(initialized) => Json(serde_json::json!({
            "initialized": initialized,
            "message": if initialized {
                "Default communities are present"
            } else {
                "Default communities need initialization"
            },
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Initialization check failed");
            init_failure("Failed to check initialization", e)
        }
    }
}
