//! Core domain models shared across all Agora services.
//!
//! These are the "truth" types — what the database stores and the API serializes.
//! Communities are keyed by a stable slug, users and memberships by wallet address.

pub mod community;
pub mod membership;
pub mod user;

/// Re-export all model types for convenience.
pub use community::*;
pub use membership::*;
pub use user::*;
