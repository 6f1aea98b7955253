/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a fresh access + refresh token pair
 * 4. Overwrite the stored refresh token
 *
 * Overwriting the stored refresh token invalidates any pair issued by an
 * earlier login: a user has at most one active refresh session, last login
 * wins.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::{create_access_token, create_refresh_token};
use crate::auth::users::{get_user_by_email, set_refresh_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `404 Not Found` - no user with that email
/// * `401 Unauthorized` - password does not match
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - persistence or token issuance failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })?;
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            ApiError::NotFound("User not found".to_string())
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = create_access_token(&state.auth, &user.id)?;
    let refresh_token = create_refresh_token(&state.auth, &user.id)?;

    // Replaces whatever refresh token was stored before
    set_refresh_token(pool, &user.id, Some(&refresh_token)).await?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: UserResponse::from(user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::testing::{register_test_user, test_state};
    use crate::auth::users::get_user_by_id;

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state().await;
        register_test_user(&state, "a@example.com", "password123").await;

        let request = LoginRequest {
            email: "a@example.com".to_string(),
            password: "password123".to_string(),
        };
        let Json(body) = login(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(body.user.email, "a@example.com");
        assert!(!body.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_overwrites_stored_refresh_token() {
        let state = test_state().await;
        let first = register_test_user(&state, "a@example.com", "password123").await;

        let request = LoginRequest {
            email: "a@example.com".to_string(),
            password: "password123".to_string(),
        };
        let Json(body) = login(State(state.clone()), Json(request)).await.unwrap();

        let pool = state.db_pool.as_ref().unwrap();
        let stored = get_user_by_id(pool, &body.user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(body.refresh_token.as_str()));
        assert_ne!(stored.refresh_token.as_deref(), Some(first.refresh_token.as_str()));
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = test_state().await;
        register_test_user(&state, "a@example.com", "password123").await;

        let request = LoginRequest {
            email: "a@example.com".to_string(),
            password: "wrongpassword".to_string(),
        };
        let result = login(State(state), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let state = test_state().await;

        let request = LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "password123".to_string(),
        };
        let result = login(State(state), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::NotFound(_)));
    }
}
