//! Bootstrap seeder for the default community table.
//!
//! Seeding is idempotent at the row level: communities that already exist
//! are left untouched (field drift in the table is not backfilled), and the
//! whole run commits as one transaction.

use agora_common::defaults::{self, CommunityDef};
use sqlx::PgPool;

use crate::repository::communities;

/// Insert any default communities that are missing. Returns how many rows
/// were actually inserted; a second run in a row returns 0.
pub async fn seed_defaults(pool: &PgPool, defs: &[CommunityDef]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for def in defs {
        let rules: Vec<String> = def.rules.iter().map(|r| r.to_string()).collect();
        let moderators: Vec<String> = def.moderators.iter().map(|m| m.to_string()).collect();

        inserted += sqlx::query(
            r#"
            INSERT INTO communities (id, name, description, member_count, color, category, rules, moderators, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, 0, $4, $5, $6, $7, TRUE, NOW(), NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(def.id)
        .bind(def.name)
        .bind(def.description)
        .bind(def.color)
        .bind(def.category)
        .bind(&rules)
        .bind(&moderators)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    tracing::info!(inserted, total = defs.len(), "Default communities seeded");
    Ok(inserted)
}

/// Readiness probe: true iff every default community id is present in the
/// active directory.
pub async fn is_seeded(pool: &PgPool, defs: &[CommunityDef]) -> Result<bool, sqlx::Error> {
    let active = communities::list_active(pool).await?;
    let active_ids: Vec<&str> = active.iter().map(|c| c.id.as_str()).collect();
    Ok(missing_default_ids(&active_ids, defs).is_empty())
}

/// Which default ids are absent from the given id list.
fn missing_default_ids<'a>(existing: &[&str], defs: &'a [CommunityDef]) -> Vec<&'a str> {
    defs.iter()
        .map(|def| def.id)
        .filter(|id| !existing.contains(id))
        .collect()
}

/// Convenience wrapper seeding the built-in table.
pub async fn initialize_defaults(pool: &PgPool) -> Result<u64, sqlx::Error> {
    seed_defaults(pool, defaults::DEFAULT_COMMUNITIES).await
}

/// Convenience wrapper probing the built-in table.
pub async fn check_initialization(pool: &PgPool) -> Result<bool, sqlx::Error> {
    is_seeded(pool, defaults::DEFAULT_COMMUNITIES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_common::defaults::DEFAULT_COMMUNITIES;

    #[test]
    fn all_ids_missing_on_empty_directory() {
        let missing = missing_default_ids(&[], DEFAULT_COMMUNITIES);
        assert_eq!(missing.len(), DEFAULT_COMMUNITIES.len());
    }

    #[test]
    fn no_ids_missing_when_all_present() {
        let existing: Vec<&str> = DEFAULT_COMMUNITIES.iter().map(|d| d.id).collect();
        assert!(missing_default_ids(&existing, DEFAULT_COMMUNITIES).is_empty());
    }

    #[test]
    fn partially_seeded_directory_reports_the_gap() {
        let missing = missing_default_ids(&["global-chat", "developer"], DEFAULT_COMMUNITIES);
        assert_eq!(missing, vec!["world-news", "ai-tech", "qa", "announcements"]);
    }

    #[test]
    fn extra_non_default_communities_are_ignored() {
        let mut existing: Vec<&str> = DEFAULT_COMMUNITIES.iter().map(|d| d.id).collect();
        existing.push("some-custom-community");
        assert!(missing_default_ids(&existing, DEFAULT_COMMUNITIES).is_empty());
    }
}
