//! Users Module
//!
//! CRUD endpoints over user records (all behind the authentication
//! middleware). The user model itself lives in [`crate::auth::users`]
//! because the session layer owns the stored refresh token.

/// HTTP handlers for user endpoints
pub mod handlers;
