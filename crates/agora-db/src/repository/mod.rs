//! Repository layer — query functions organized by domain.

pub mod communities;
pub mod memberships;
pub mod users;
