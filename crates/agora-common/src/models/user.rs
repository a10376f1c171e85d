//! User model — the identity layer.
//!
//! Users are identified by wallet address; there is no password or session
//! handling here. Registration is an upsert: the first call creates the row,
//! every later call refreshes the profile fields and `last_login`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An Agora user account, keyed by wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Wallet address — doubles as the user id
    pub wallet_address: String,

    /// Display username (1-32 chars)
    pub username: String,

    /// Profile picture URL (optional)
    pub profile_picture_url: Option<String>,

    /// Whether the wallet passed personhood verification
    pub is_verified: bool,

    /// First time this wallet logged in
    pub first_login: DateTime<Utc>,

    /// Most recent login
    pub last_login: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Register-or-login request. Upsert semantics keyed by wallet address.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(regex(path = *WALLET_REGEX, message = "Invalid wallet address"))]
    pub wallet_address: String,

    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(url(message = "Profile picture must be a valid URL"))]
    pub profile_picture_url: Option<String>,

    pub is_verified: bool,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub wallet_address: String,
    pub username: String,
    pub profile_picture_url: Option<String>,
    pub is_verified: bool,
    pub first_login: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            wallet_address: u.wallet_address,
            username: u.username,
            profile_picture_url: u.profile_picture_url,
            is_verified: u.is_verified,
            first_login: u.first_login,
            last_login: u.last_login,
            created_at: u.created_at,
        }
    }
}

use std::sync::LazyLock;

/// Hex wallet address with 0x prefix. Length is deliberately loose so
/// non-EVM address experiments don't bounce off the API.
pub static WALLET_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^0x[0-9a-fA-F]{3,64}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    fn request(wallet: &str) -> UpsertUserRequest {
        UpsertUserRequest {
            wallet_address: wallet.to_string(),
            username: "alice".into(),
            profile_picture_url: None,
            is_verified: true,
        }
    }

    #[test]
    fn wallet_addresses_validate() {
        assert!(request("0xABC").validate().is_ok());
        assert!(request("0xdeadbeef00112233445566778899aabbccddeeff").validate().is_ok());
    }

    #[test]
    fn malformed_wallets_rejected() {
        assert!(request("deadbeef").validate().is_err());
        assert!(request("0x").validate().is_err());
        assert!(request("0xNOTHEX").validate().is_err());
    }

    #[test]
    fn empty_username_rejected() {
        let mut req = request("0xABC");
        req.username = String::new();
        assert!(req.validate().is_err());
    }
}
