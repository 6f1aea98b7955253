//! Inkpost
//!
//! A posts/comments/users backend guarded by token-based authentication.
//!
//! # Overview
//!
//! The crate provides an Axum HTTP server with:
//!
//! - Session lifecycle endpoints: register, login, refresh, logout
//! - Short-lived access tokens and long-lived refresh tokens, signed with
//!   distinct secrets; at most one refresh token is honored per user at a
//!   time, which gives server-side revocation on top of stateless tokens
//! - An authentication middleware gating every resource route
//! - CRUD endpoints for users, posts and comments over SQLite (sqlx)
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── server/     - App state, configuration, initialization
//! ├── routes/     - Router assembly (public vs protected)
//! ├── auth/       - User store, token codec, session handlers
//! ├── middleware/ - Authentication gate
//! ├── posts/      - Post records and handlers
//! ├── comments/   - Comment records and handlers
//! ├── users/      - User CRUD handlers
//! └── error/      - Error taxonomy and response conversion
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts
pub mod posts;

/// Comments
pub mod comments;

/// User CRUD endpoints
pub mod users;

/// Error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState, AuthConfig};
