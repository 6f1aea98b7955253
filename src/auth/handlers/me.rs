/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user. The route sits behind
 * the authentication middleware; the handler reads the identity the
 * middleware attached to the request.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the token's user no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    AuthUser(user): AuthUser,
    State(pool): State<Option<SqlitePool>>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })?;

    let user = get_user_by_id(&pool, &user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", user.user_id);
            ApiError::NotFound("User not found".to_string())
        })?;

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::testing::{register_test_user, test_state};
    use crate::middleware::AuthenticatedUser;

    #[tokio::test]
    async fn test_get_me_success() {
        let state = test_state().await;
        let registered = register_test_user(&state, "a@example.com", "password123").await;

        let auth_user = AuthUser(AuthenticatedUser {
            user_id: registered.user.id.clone(),
        });
        let Json(body) = get_me(auth_user, State(state.db_pool.clone())).await.unwrap();
        assert_eq!(body.email, "a@example.com");
        assert_eq!(body.id, registered.user.id);
    }

    #[tokio::test]
    async fn test_get_me_unknown_user() {
        let state = test_state().await;

        let auth_user = AuthUser(AuthenticatedUser {
            user_id: "missing".to_string(),
        });
        let result = get_me(auth_user, State(state.db_pool.clone())).await;
        assert!(matches!(result.unwrap_err(), ApiError::NotFound(_)));
    }
}
