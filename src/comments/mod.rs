//! Comments Module
//!
//! Comment records and their CRUD endpoints (all behind the authentication
//! middleware).

/// Database operations for comments
pub mod db;

/// HTTP handlers for comment endpoints
pub mod handlers;

pub use db::Comment;
