//! Community model — a named discussion space.
//!
//! Communities carry a denormalized member count that is kept in sync with
//! the membership table by the repository layer (every membership write and
//! its counter delta commit in the same transaction).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An Agora community.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Community {
    /// Stable slug, e.g. "global-chat". Doubles as the row key.
    pub id: String,

    /// Community name (2-100 chars)
    pub name: String,

    /// Community description (up to 1000 chars)
    pub description: String,

    /// Member count (denormalized; never negative)
    pub member_count: i32,

    /// UI accent color token (e.g. "bg-emerald-500")
    pub color: String,

    /// Category label for grouping in the directory
    pub category: String,

    /// Ordered community rules
    pub rules: Vec<String>,

    /// Moderator handles, in display order
    pub moderators: Vec<String>,

    /// Inactive communities are hidden from the directory, never hard-deleted
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 2, max = 64, message = "Community id must be 2-64 characters"))]
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Community id must be a lowercase slug (letters, numbers, hyphens)"
    ))]
    pub id: String,

    #[validate(length(min = 2, max = 100, message = "Community name must be 2-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: String,

    #[validate(length(max = 32))]
    pub color: String,

    #[validate(length(max = 64))]
    pub category: String,

    pub rules: Vec<String>,

    pub moderators: Vec<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: i32,
    pub color: String,
    pub category: String,
    pub rules: Vec<String>,
    pub moderators: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Community> for CommunityResponse {
    fn from(c: Community) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            member_count: c.member_count,
            color: c.color,
            category: c.category,
            rules: c.rules,
            moderators: c.moderators,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

use std::sync::LazyLock;
static SLUG_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str) -> CreateCommunityRequest {
        CreateCommunityRequest {
            id: id.to_string(),
            name: "Test Community".into(),
            description: "A place for tests".into(),
            color: "bg-primary".into(),
            category: "General".into(),
            rules: vec!["Be kind".into()],
            moderators: vec!["@Mod".into()],
            is_active: None,
        }
    }

    #[test]
    fn slug_ids_validate() {
        assert!(request("global-chat").validate().is_ok());
        assert!(request("qa").validate().is_ok());
        assert!(request("ai-tech").validate().is_ok());
    }

    #[test]
    fn non_slug_ids_rejected() {
        assert!(request("Global Chat").validate().is_err());
        assert!(request("-leading").validate().is_err());
        assert!(request("trailing-").validate().is_err());
        assert!(request("x").validate().is_err());
    }
}
