//! Middleware Module
//!
//! HTTP middleware for the server. Currently provides:
//!
//! - **`auth`** - Authentication middleware protecting routes behind the
//!   bearer access token

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
