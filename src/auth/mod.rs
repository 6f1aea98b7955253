//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management. It provides the HTTP handlers for the session lifecycle and
//! owns the user store and the token codec.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations (including the
//!   stored refresh token)
//! - **`sessions`** - Signed token creation and verification
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: credentials in → user created → access + refresh pair out
//! 2. **Login**: credentials verified → fresh pair out, stored refresh token
//!    replaced
//! 3. **Refresh**: refresh token in → rotated pair out
//! 4. **Logout**: refresh token in → stored token cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Access tokens are short-lived and verified purely by signature + expiry
//! - Refresh tokens are long-lived, signed with a distinct secret, and only
//!   honored while they match the value stored on the user record; that
//!   equality check is what makes logout and rotation effective

/// User data model and database operations
pub mod users;

/// Token creation and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{
    get_me, login, logout, refresh, register, AuthResponse, LoginRequest, LogoutRequest,
    MessageResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserResponse,
};
