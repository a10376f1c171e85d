//! User routes — register-or-login upsert and per-wallet lookups.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use agora_common::{
    error::{AgoraError, AgoraResult},
    models::user::{UpsertUserRequest, UserResponse},
    validation::validate_request,
};
use agora_db::repository::{memberships, users};
use std::sync::Arc;

use crate::AppState;

/// User routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(upsert_user))
        .route("/users/{wallet_address}", get(get_user))
        .route("/users/{wallet_address}/communities", get(user_communities))
}

/// POST /api/v1/users — Register or log in a wallet (upsert).
///
/// New and returning wallets both land here; the repository refreshes
/// `last_login` on every call. After the upsert the wallet is auto-joined
/// to the default community — a best-effort enrichment that is logged and
/// never fails the registration itself.
async fn upsert_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpsertUserRequest>,
) -> AgoraResult<Json<UserResponse>> {
    validate_request(&body)?;

    let user = users::upsert_user(
        &state.db.pool,
        &body.wallet_address,
        &body.username,
        body.profile_picture_url.as_deref(),
        body.is_verified,
    )
    .await?;

    match memberships::auto_join_default(
        &state.db.pool,
        &user.wallet_address,
        &state.default_community,
    )
    .await
    {
        Ok(true) => tracing::info!(
            wallet = %user.wallet_address,
            community_id = %state.default_community,
            "Auto-joined default community"
        ),
        Ok(false) => {}
        Err(e) => tracing::warn!(
            wallet = %user.wallet_address,
            community_id = %state.default_community,
            error = %e,
            "Auto-join to default community failed"
        ),
    }

    Ok(Json(user.into()))
}

/// GET /api/v1/users/:wallet_address
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(wallet_address): Path<String>,
) -> AgoraResult<Json<UserResponse>> {
    let user = users::find_by_address(&state.db.pool, &wallet_address)
        .await?
        .ok_or(AgoraError::NotFound {
            resource: "User".into(),
        })?;

    Ok(Json(user.into()))
}

/// GET /api/v1/users/:wallet_address/communities — Joined community ids.
async fn user_communities(
    State(state): State<Arc<AppState>>,
    Path(wallet_address): Path<String>,
) -> AgoraResult<Json<Vec<String>>> {
    let community_ids = memberships::communities_for_user(&state.db.pool, &wallet_address).await?;
    Ok(Json(community_ids))
}
