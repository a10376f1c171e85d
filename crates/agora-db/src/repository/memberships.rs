//! Membership repository — the join/leave ledger.
//!
//! Every write here pairs the membership row change with its member-count
//! delta inside one transaction. The existence check is the insert/delete
//! itself (`ON CONFLICT DO NOTHING`, `DELETE ... RETURNING`), so concurrent
//! joins or leaves for the same pair cannot double-count.

use agora_common::models::membership::Membership;
use sqlx::PgPool;

use super::communities;

/// Join a community. Idempotent: joining twice returns the existing
/// membership unchanged and leaves the counter alone.
///
/// Returns the membership and whether it was newly created.
pub async fn join(
    pool: &PgPool,
    wallet_address: &str,
    community_id: &str,
) -> Result<(Membership, bool), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query_as::<_, Membership>(
        r#"
        INSERT INTO community_memberships (wallet_address, community_id, joined_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (wallet_address, community_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(wallet_address)
    .bind(community_id)
    .fetch_optional(&mut *tx)
    .await?;

    match inserted {
        Some(membership) => {
            communities::apply_member_delta(&mut *tx, community_id, 1).await?;
            tx.commit().await?;
            Ok((membership, true))
        }
        None => {
            // Already a member — return the existing row, counter untouched.
            let existing = sqlx::query_as::<_, Membership>(
                "SELECT * FROM community_memberships WHERE wallet_address = $1 AND community_id = $2",
            )
            .bind(wallet_address)
            .bind(community_id)
            .fetch_one(&mut *tx)
            .await?;
            tx.commit().await?;
            Ok((existing, false))
        }
    }
}

/// Leave a community. No-op when not a member.
///
/// Returns whether a membership was actually removed.
pub async fn leave(
    pool: &PgPool,
    wallet_address: &str,
    community_id: &str,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        "DELETE FROM community_memberships WHERE wallet_address = $1 AND community_id = $2",
    )
    .bind(wallet_address)
    .bind(community_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if deleted == 0 {
        tx.commit().await?;
        return Ok(false);
    }

    communities::apply_member_delta(&mut *tx, community_id, -1).await?;
    tx.commit().await?;
    Ok(true)
}

/// Join several communities in one all-or-nothing transaction.
///
/// Already-joined communities are skipped without touching their counters.
/// Returns the ids that were newly joined, in input order.
pub async fn join_many(
    pool: &PgPool,
    wallet_address: &str,
    community_ids: &[String],
) -> Result<Vec<String>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut newly_joined = Vec::new();

    for community_id in community_ids {
        let inserted = sqlx::query(
            r#"
            INSERT INTO community_memberships (wallet_address, community_id, joined_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (wallet_address, community_id) DO NOTHING
            "#,
        )
        .bind(wallet_address)
        .bind(community_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted > 0 {
            communities::apply_member_delta(&mut *tx, community_id, 1).await?;
            newly_joined.push(community_id.clone());
        }
    }

    tx.commit().await?;
    Ok(newly_joined)
}

/// Point lookup for a single membership.
pub async fn find_membership(
    pool: &PgPool,
    wallet_address: &str,
    community_id: &str,
) -> Result<Option<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        "SELECT * FROM community_memberships WHERE wallet_address = $1 AND community_id = $2",
    )
    .bind(wallet_address)
    .bind(community_id)
    .fetch_optional(pool)
    .await
}

/// Check if a wallet is a member of a community.
pub async fn is_member(
    pool: &PgPool,
    wallet_address: &str,
    community_id: &str,
) -> Result<bool, sqlx::Error> {
    let result: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM community_memberships WHERE wallet_address = $1 AND community_id = $2)",
    )
    .bind(wallet_address)
    .bind(community_id)
    .fetch_one(pool)
    .await?;
    Ok(result.0)
}

/// List the community ids a wallet has joined, oldest membership first.
pub async fn communities_for_user(
    pool: &PgPool,
    wallet_address: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT community_id FROM community_memberships
        WHERE wallet_address = $1
        ORDER BY joined_at
        "#,
    )
    .bind(wallet_address)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Join the configured default community. Callers treat failure as
/// best-effort: registration logs it and moves on.
///
/// Runs on every login, so an existing membership short-circuits before the
/// join transaction is opened. The check is only an optimization — `join`
/// itself stays idempotent under concurrent calls.
pub async fn auto_join_default(
    pool: &PgPool,
    wallet_address: &str,
    default_community_id: &str,
) -> Result<bool, sqlx::Error> {
    if is_member(pool, wallet_address, default_community_id).await? {
        return Ok(false);
    }
    let (_, newly_joined) = join(pool, wallet_address, default_community_id).await?;
    Ok(newly_joined)
}
