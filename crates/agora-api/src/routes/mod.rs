//! API route modules.

pub mod communities;
pub mod health;
pub mod init;
pub mod users;
