/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public authentication routes (register, login, refresh, logout)
 * 2. Protected API routes, wrapped with the authentication middleware
 * 3. Fallback handler (404)
 */

use axum::http::StatusCode;
use axum::{middleware, Router};

use crate::middleware::auth_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::routes::auth_routes::configure_auth_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// The protected subtree carries the authentication middleware as a route
/// layer, so unmatched paths fall through to the 404 fallback without
/// touching the gate.
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_auth_routes(Router::new());

    let protected = configure_api_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.clone(), auth_middleware),
    );

    public
        .merge(protected)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
