//! User repository — wallet-keyed accounts with upsert-on-login semantics.

use agora_common::models::user::User;
use sqlx::PgPool;

/// Create-or-update a user keyed by wallet address.
///
/// First call creates the row (stamping `first_login`); every later call
/// refreshes the profile fields and `last_login` while `first_login` and
/// `created_at` keep their original values.
pub async fn upsert_user(
    pool: &PgPool,
    wallet_address: &str,
    username: &str,
    profile_picture_url: Option<&str>,
    is_verified: bool,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (wallet_address, username, profile_picture_url, is_verified, first_login, last_login, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW(), NOW(), NOW())
        ON CONFLICT (wallet_address) DO UPDATE SET
            username = EXCLUDED.username,
            profile_picture_url = EXCLUDED.profile_picture_url,
            is_verified = EXCLUDED.is_verified,
            last_login = NOW(),
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(wallet_address)
    .bind(username)
    .bind(profile_picture_url)
    .bind(is_verified)
    .fetch_one(pool)
    .await
}

/// Find a user by wallet address.
pub async fn find_by_address(pool: &PgPool, wallet_address: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE wallet_address = $1")
        .bind(wallet_address)
        .fetch_optional(pool)
        .await
}

