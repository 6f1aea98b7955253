/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting routes that require
 * authentication. It extracts and verifies the access token from the
 * Authorization header and provides the user ID to handlers.
 *
 * The middleware never touches the database: access-token trust is fully
 * delegated to the signature check, keeping the filter O(1) and stateless
 * on every request.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::verify_access_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies it against the access secret
/// 3. Attaches the user ID to request extensions for use in handlers
///
/// Returns 401 if no credential is presented and 403 if the presented token
/// is invalid or expired.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated("Access token required".to_string())
        })?;

    // Header format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthenticated("Access token required".to_string())
    })?;

    let claims = verify_access_token(&app_state.auth, token).map_err(|e| {
        tracing::warn!("Rejected access token: {:?}", e);
        ApiError::Forbidden("Invalid or expired access token".to_string())
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind [`auth_middleware`];
/// rejects with 401 if the middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated("Access token required".to_string())
            })?;

        Ok(AuthUser(user))
    }
}
