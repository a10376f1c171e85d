//! Community repository — the community directory and its member counter.

use agora_common::models::community::Community;
use sqlx::PgPool;

/// Create a new community with a zero member count.
pub async fn create_community(
    pool: &PgPool,
    id: &str,
    name: &str,
    description: &str,
    color: &str,
    category: &str,
    rules: &[String],
    moderators: &[String],
    is_active: bool,
) -> Result<Community, sqlx::Error> {
    sqlx::query_as::<_, Community>(
        r#"
        INSERT INTO communities (id, name, description, member_count, color, category, rules, moderators, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, 0, $4, $5, $6, $7, $8, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(color)
    .bind(category)
    .bind(rules)
    .bind(moderators)
    .bind(is_active)
    .fetch_one(pool)
    .await
}

/// Find a community by its slug.
pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Community>, sqlx::Error> {
    sqlx::query_as::<_, Community>("SELECT * FROM communities WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Check whether a community exists (active or not).
pub async fn exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM communities WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(result.0)
}

/// List active communities, most popular first.
pub async fn list_active(pool: &PgPool) -> Result<Vec<Community>, sqlx::Error> {
    sqlx::query_as::<_, Community>(
        r#"
        SELECT * FROM communities
        WHERE is_active = TRUE
        ORDER BY member_count DESC, id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Apply a delta to a community's member count and stamp `updated_at`.
///
/// The update is a single atomic statement, floored at zero. Takes any
/// executor so membership transactions can run it on their own connection —
/// the counter must commit or roll back together with the membership write.
pub async fn apply_member_delta<'a>(
    executor: impl sqlx::PgExecutor<'a>,
    community_id: &str,
    delta: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE communities SET
            member_count = GREATEST(member_count + $2, 0),
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(community_id)
    .bind(delta)
    .execute(executor)
    .await?;
    Ok(())
}
