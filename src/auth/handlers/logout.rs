/**
 * Logout Handler
 *
 * This module implements the logout handler for POST /auth/logout.
 *
 * Logout takes the refresh token in the request body and does not require a
 * live access token: a user whose access token already expired must still be
 * able to terminate the session.
 *
 * On success the stored refresh token is cleared, so the supplied token (and
 * any access token minted from it, once expired) is the last credential that
 * session will ever produce. Repeating logout with the same token fails:
 * the second call proves the session was already terminated rather than
 * silently succeeding.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LogoutRequest, MessageResponse};
use crate::auth::sessions::verify_refresh_token;
use crate::auth::users::clear_refresh_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Logout handler
///
/// # Errors
///
/// * `400 Bad Request` - no refresh token in the body
/// * `401 Unauthorized` - token invalid, expired, already logged out, or
///   belonging to a deleted user
/// * `503 Service Unavailable` - database not configured
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })?;

    let token = request
        .refresh_token
        .ok_or_else(|| ApiError::BadRequest("Refresh token is required".to_string()))?;

    let claims = verify_refresh_token(&state.auth, &token).map_err(|e| {
        tracing::warn!("Rejected refresh token on logout: {:?}", e);
        ApiError::InvalidToken("Invalid or expired refresh token".to_string())
    })?;

    // Conditional clear: also covers a deleted user and a token already
    // superseded by login, refresh or an earlier logout
    let cleared = clear_refresh_token(pool, &claims.sub, &token).await?;
    if !cleared {
        tracing::warn!("Logout with a token that is no longer stored: {}", claims.sub);
        return Err(ApiError::InvalidToken(
            "Refresh token is no longer valid".to_string(),
        ));
    }

    tracing::info!("User logged out: {}", claims.sub);

    Ok(Json(MessageResponse {
        message: "You have been logged out".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::testing::{register_test_user, test_state};
    use crate::auth::users::{delete_user, get_user_by_id};

    fn request(token: Option<&str>) -> LogoutRequest {
        LogoutRequest {
            refresh_token: token.map(|t| t.to_string()),
        }
    }

    #[tokio::test]
    async fn test_logout_clears_stored_token() {
        let state = test_state().await;
        let registered = register_test_user(&state, "a@example.com", "password123").await;

        logout(
            State(state.clone()),
            Json(request(Some(&registered.refresh_token))),
        )
        .await
        .unwrap();

        let pool = state.db_pool.as_ref().unwrap();
        let stored = get_user_by_id(pool, &registered.user.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_logout_twice_fails() {
        let state = test_state().await;
        let registered = register_test_user(&state, "a@example.com", "password123").await;

        logout(
            State(state.clone()),
            Json(request(Some(&registered.refresh_token))),
        )
        .await
        .unwrap();

        let result = logout(
            State(state),
            Json(request(Some(&registered.refresh_token))),
        )
        .await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_logout_missing_token() {
        let state = test_state().await;
        let result = logout(State(state), Json(request(None))).await;
        assert!(matches!(result.unwrap_err(), ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_logout_invalid_token() {
        let state = test_state().await;
        let result = logout(State(state), Json(request(Some("invalid_token")))).await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_logout_deleted_user() {
        let state = test_state().await;
        let registered = register_test_user(&state, "a@example.com", "password123").await;

        let pool = state.db_pool.as_ref().unwrap();
        delete_user(pool, &registered.user.id).await.unwrap();

        let result = logout(
            State(state),
            Json(request(Some(&registered.refresh_token))),
        )
        .await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidToken(_)));
    }
}
