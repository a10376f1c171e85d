//! Membership model — a wallet's membership in a specific community.
//!
//! Keyed by `(wallet_address, community_id)`; a row exists exactly when the
//! wallet is a member. Leaving deletes the row (no soft-delete flag).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::WALLET_REGEX;

/// Represents a wallet's membership in a community.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    pub wallet_address: String,
    pub community_id: String,

    /// When the wallet joined this community
    pub joined_at: DateTime<Utc>,
}

/// Join/leave request body.
#[derive(Debug, Deserialize, Validate)]
pub struct MembershipRequest {
    #[validate(regex(path = *WALLET_REGEX, message = "Invalid wallet address"))]
    pub wallet_address: String,
}

/// Batch join request body.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchJoinRequest {
    #[validate(regex(path = *WALLET_REGEX, message = "Invalid wallet address"))]
    pub wallet_address: String,

    #[validate(length(min = 1, max = 50, message = "Provide 1-50 community ids"))]
    pub community_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub wallet_address: String,
    pub community_id: String,
    pub joined_at: DateTime<Utc>,
    /// False when the join was an idempotent no-op on an existing membership.
    pub newly_joined: bool,
}

impl MembershipResponse {
    pub fn from_membership(m: Membership, newly_joined: bool) -> Self {
        Self {
            wallet_address: m.wallet_address,
            community_id: m.community_id,
            joined_at: m.joined_at,
            newly_joined,
        }
    }
}

/// Point-lookup result for "is this wallet a member of this community?".
#[derive(Debug, Serialize)]
pub struct MembershipStatus {
    pub member: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_request_accepts_wallet_addresses() {
        let req = MembershipRequest { wallet_address: "0xABC".into() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn batch_join_rejects_empty_id_list() {
        let req = BatchJoinRequest {
            wallet_address: "0xABC".into(),
            community_ids: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn membership_status_omits_absent_joined_at() {
        let status = MembershipStatus { member: false, joined_at: None };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json, serde_json::json!({ "member": false }));
    }
}
