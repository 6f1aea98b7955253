/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container for the application, holding:
 * - The optional SQLite connection pool
 * - The token configuration used by the session layer and the gate
 *
 * # Thread Safety
 *
 * Both fields are cheaply cloneable and safe to share across request
 * handlers; `SqlitePool` is internally reference-counted.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::server::config::AuthConfig;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `db_pool` - Optional SQLite connection pool. `None` if the database is
///   not configured (e.g. `DATABASE_URL` unset); handlers respond 503 in
///   that case.
/// * `auth` - Token secrets and TTLs, loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: Option<SqlitePool>,

    /// Token configuration for issuing and verifying tokens
    pub auth: AuthConfig,
}

/// Allow handlers that only read the database to extract `Option<SqlitePool>`
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers that only verify or issue tokens to extract `AuthConfig`
impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Unwrap the optional database pool, failing with 503 when unconfigured
pub fn require_db(pool: Option<SqlitePool>) -> Result<SqlitePool, ApiError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })
}
