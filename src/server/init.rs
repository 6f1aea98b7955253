/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: loading
 * configuration, connecting the database, and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Load the token configuration from the environment
 * 2. Load the optional database (connection pool + migrations)
 * 3. Build the application state
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * A missing or failing database does not prevent startup; the server runs
 * and answers 503 on database-backed endpoints.
 */

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{load_database, AuthConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing inkpost server");

    // Token secrets and TTLs, read once; nothing below reads the environment
    let auth = AuthConfig::from_env();

    let db_pool = load_database().await;

    let app_state = AppState { db_pool, auth };

    tracing::info!("Router configured");
    create_router(app_state)
}
