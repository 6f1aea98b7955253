/**
 * Refresh Handler
 *
 * This module implements the token refresh handler for POST /auth/refresh.
 *
 * # Refresh Process
 *
 * 1. Verify the supplied refresh token cryptographically
 * 2. Resolve the embedded user ID
 * 3. Rotate: issue a new access + refresh pair and replace the stored
 *    refresh token, conditional on it still equaling the supplied one
 *
 * Rotation means every refresh token is single-use: once a refresh lands,
 * the previous token stops being honored even though its signature is still
 * valid. A token that fails the stored-value comparison (already rotated,
 * logged out, superseded by a new login) is rejected the same way as a
 * cryptographically invalid one.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{RefreshRequest, RefreshResponse};
use crate::auth::sessions::{create_access_token, create_refresh_token, verify_refresh_token};
use crate::auth::users::{get_user_by_id, rotate_refresh_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - token missing, invalid, expired, or no longer the
///   stored one
/// * `404 Not Found` - the embedded user no longer exists
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - persistence or token issuance failed
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })?;

    let old_token = request.refresh_token.ok_or_else(|| {
        ApiError::Unauthenticated("Refresh token is required".to_string())
    })?;

    let claims = verify_refresh_token(&state.auth, &old_token).map_err(|e| {
        tracing::warn!("Rejected refresh token: {:?}", e);
        ApiError::InvalidToken("Invalid or expired refresh token".to_string())
    })?;

    let user = get_user_by_id(pool, &claims.sub).await?.ok_or_else(|| {
        tracing::warn!("Refresh for unknown user: {}", claims.sub);
        ApiError::NotFound("User not found".to_string())
    })?;

    let access_token = create_access_token(&state.auth, &user.id)?;
    let refresh_token = create_refresh_token(&state.auth, &user.id)?;

    let rotated = rotate_refresh_token(pool, &user.id, &old_token, &refresh_token).await?;
    if !rotated {
        tracing::warn!("Stale refresh token for user: {}", user.id);
        return Err(ApiError::InvalidToken(
            "Refresh token is no longer valid".to_string(),
        ));
    }

    tracing::info!("Rotated refresh token for user: {}", user.id);

    Ok(Json(RefreshResponse {
        access_token,
        refresh_token,
    }))
}
