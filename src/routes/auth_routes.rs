/**
 * Authentication Route Configuration
 *
 * Public session lifecycle endpoints. None of these sit behind the
 * authentication middleware: register and login are how credentials come
 * into existence, refresh and logout authenticate through the refresh token
 * in the request body (requiring a live access token to log out would lock
 * users out of logout once the access token expires).
 */

use axum::Router;

use crate::auth::{login, logout, refresh, register};
use crate::server::state::AppState;

/// Configure the public authentication routes
///
/// - `POST /auth/register` - User registration
/// - `POST /auth/login` - User login
/// - `POST /auth/refresh` - Rotate the refresh token, mint a new access token
/// - `POST /auth/logout` - Revoke the refresh token
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/auth/refresh", axum::routing::post(refresh))
        .route("/auth/logout", axum::routing::post(logout))
}
