//! API Error Module
//!
//! Error taxonomy for the HTTP layer and its conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handler failures are classified into an [`ApiError`] variant; the
//! `IntoResponse` implementation turns each variant into a JSON error body
//! with a fixed status code. Internal failures (database, password hashing,
//! token issuance) are logged and masked.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
