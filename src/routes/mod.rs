//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! ├── auth_routes.rs  - Public session lifecycle routes
//! └── api_routes.rs   - Protected resource routes
//! ```

/// Main router creation
pub mod router;

/// Public authentication routes
pub mod auth_routes;

/// Protected API routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
