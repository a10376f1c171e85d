//! Community routes — directory listing, creation, join/leave, membership lookups.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use agora_common::{
    error::{AgoraError, AgoraResult},
    models::community::{CommunityResponse, CreateCommunityRequest},
    models::membership::{
        BatchJoinRequest, MembershipRequest, MembershipResponse, MembershipStatus,
    },
    validation::validate_request,
};
use agora_db::repository::{communities, memberships};
use std::sync::Arc;

use crate::AppState;

/// Community routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/communities", get(list_communities).post(create_community))
        .route("/communities/batch-join", post(batch_join))
        .route("/communities/{community_id}", get(get_community))
        .route("/communities/{community_id}/join", post(join_community))
        .route("/communities/{community_id}/leave", post(leave_community))
        .route(
            "/communities/{community_id}/members/{wallet_address}",
            get(membership_status),
        )
}

/// GET /api/v1/communities — List active communities, most popular first.
async fn list_communities(
    State(state): State<Arc<AppState>>,
) -> AgoraResult<Json<Vec<CommunityResponse>>> {
    let communities = communities::list_active(&state.db.pool).await?;
    Ok(Json(communities.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/communities — Create a new community (administrative).
async fn create_community(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCommunityRequest>,
) -> AgoraResult<Json<CommunityResponse>> {
    validate_request(&body)?;

    // Let the insert detect duplicates; a pre-check would race concurrent
    // creates and surface the loser as a 500.
    let community = communities::create_community(
        &state.db.pool,
        &body.id,
        &body.name,
        &body.description,
        &body.color,
        &body.category,
        &body.rules,
        &body.moderators,
        body.is_active.unwrap_or(true),
    )
    .await
    .map_err(|e| AgoraError::on_conflict("Community", e))?;

    tracing::info!(community_id = %community.id, name = %community.name, "Community created");

    Ok(Json(community.into()))
}

/// GET /api/v1/communities/:community_id
async fn get_community(
    State(state): State<Arc<AppState>>,
    Path(community_id): Path<String>,
) -> AgoraResult<Json<CommunityResponse>> {
    let community = communities::find_by_id(&state.db.pool, &community_id)
        .await?
        .ok_or(AgoraError::NotFound {
            resource: "Community".into(),
        })?;

    Ok(Json(community.into()))
}

/// POST /api/v1/communities/:community_id/join
async fn join_community(
    State(state): State<Arc<AppState>>,
    Path(community_id): Path<String>,
    Json(body): Json<MembershipRequest>,
) -> AgoraResult<Json<MembershipResponse>> {
    validate_request(&body)?;

    if !communities::exists(&state.db.pool, &community_id).await? {
        return Err(AgoraError::NotFound {
            resource: "Community".into(),
        });
    }

    let (membership, newly_joined) =
        memberships::join(&state.db.pool, &body.wallet_address, &community_id).await?;

    if newly_joined {
        tracing::info!(
            wallet = %body.wallet_address,
            community_id = %community_id,
            "Joined community"
        );
    }

    Ok(Json(MembershipResponse::from_membership(membership, newly_joined)))
}

/// POST /api/v1/communities/:community_id/leave
async fn leave_community(
    State(state): State<Arc<AppState>>,
    Path(community_id): Path<String>,
    Json(body): Json<MembershipRequest>,
) -> AgoraResult<Json<serde_json::Value>> {
    validate_request(&body)?;

    let left = memberships::leave(&state.db.pool, &body.wallet_address, &community_id).await?;

    if left {
        tracing::info!(
            wallet = %body.wallet_address,
            community_id = %community_id,
            "Left community"
        );
    }

    Ok(Json(serde_json::json!({ "left": left })))
}

/// GET /api/v1/communities/:community_id/members/:wallet_address
async fn membership_status(
    State(state): State<Arc<AppState>>,
    Path((community_id, wallet_address)): Path<(String, String)>,
) -> AgoraResult<Json<MembershipStatus>> {
    let membership =
        memberships::find_membership(&state.db.pool, &wallet_address, &community_id).await?;

    Ok(Json(MembershipStatus {
        member: membership.is_some(),
        joined_at: membership.map(|m| m.joined_at),
    }))
}

/// POST /api/v1/communities/batch-join — Join several communities at once.
///
/// All inserts and counter updates commit as one transaction; already-joined
/// communities are skipped.
async fn batch_join(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BatchJoinRequest>,
) -> AgoraResult<Json<serde_json::Value>> {
    validate_request(&body)?;

    // Unknown ids fail the whole batch up front rather than mid-transaction.
    for community_id in &body.community_ids {
        if !communities::exists(&state.db.pool, community_id).await? {
            return Err(AgoraError::NotFound {
                resource: format!("Community '{community_id}'"),
            });
        }
    }

    let newly_joined =
        memberships::join_many(&state.db.pool, &body.wallet_address, &body.community_ids).await?;

    tracing::info!(
        wallet = %body.wallet_address,
        requested = body.community_ids.len(),
        joined = newly_joined.len(),
        "Batch join"
    );

    Ok(Json(serde_json::json!({ "joined": newly_joined })))
}
