//! Authentication Handlers Module
//!
//! HTTP handlers for the session lifecycle endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /auth/register
//! ├── login.rs     - POST /auth/login
//! ├── refresh.rs   - POST /auth/refresh
//! ├── logout.rs    - POST /auth/logout
//! └── me.rs        - GET /auth/me (protected)
//! ```
//!
//! # Session Lifecycle
//!
//! A user moves through: registered → authenticated (one live refresh token)
//! → re-authenticated (token replaced) → logged out (token cleared). Register
//! and login issue a fresh pair and overwrite the stored refresh token;
//! refresh rotates it; logout clears it.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Token refresh handler
pub mod refresh;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{
    AuthResponse, LoginRequest, LogoutRequest, MessageResponse, RefreshRequest, RefreshResponse,
    RegisterRequest, UserResponse,
};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use refresh::refresh;
pub use register::register;
