//! Posts Module
//!
//! Post records and their CRUD endpoints (all behind the authentication
//! middleware).

/// Database operations for posts
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::Post;
