/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check that the email is not already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user (no refresh token yet)
 * 5. Issue an access + refresh token pair and persist the refresh token
 * 6. Return both tokens and the user info
 *
 * The token pair is issued only after the first insert because its payload
 * embeds the store-assigned user ID, which does not exist before that write.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::{create_access_token, create_refresh_token};
use crate::auth::users::{create_user, get_user_by_email, set_refresh_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email, short password or empty username
/// * `409 Conflict` - email already registered
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing, persistence or token issuance failed
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable("Database not configured".to_string())
    })?;
    tracing::info!("Registration request for email: {}", request.email);

    if request.username.trim().is_empty() {
        return Err(ApiError::BadRequest("Username is required".to_string()));
    }
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(pool, request.username, request.email, password_hash).await?;

    // Second write: the token payload needs the id assigned above
    let access_token = create_access_token(&state.auth, &user.id)?;
    let refresh_token = create_refresh_token(&state.auth, &user.id)?;
    set_refresh_token(pool, &user.id, Some(&refresh_token)).await?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            refresh_token,
            user: UserResponse::from(user),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::testing::test_state;
    use crate::auth::sessions::verify_access_token;
    use crate::auth::users::get_user_by_id;

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            username: "tester".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = test_state().await;

        let (status, Json(body)) = register(State(state.clone()), Json(request("a@example.com")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.user.email, "a@example.com");

        // Issued access token resolves back to the stored user
        let claims = verify_access_token(&state.auth, &body.access_token).unwrap();
        assert_eq!(claims.sub, body.user.id);

        // Refresh token is persisted on the record
        let pool = state.db_pool.as_ref().unwrap();
        let stored = get_user_by_id(pool, &body.user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(body.refresh_token.as_str()));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state().await;

        register(State(state.clone()), Json(request("a@example.com")))
            .await
            .unwrap();
        let result = register(State(state.clone()), Json(request("a@example.com"))).await;
        assert!(matches!(result.unwrap_err(), ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let state = test_state().await;
        let result = register(State(state), Json(request("not-an-email"))).await;
        assert!(matches!(result.unwrap_err(), ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let state = test_state().await;
        let mut req = request("a@example.com");
        req.password = "short".to_string();
        let result = register(State(state), Json(req)).await;
        assert!(matches!(result.unwrap_err(), ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_no_database() {
        let mut state = test_state().await;
        state.db_pool = None;
        let result = register(State(state), Json(request("a@example.com"))).await;
        assert!(matches!(result.unwrap_err(), ApiError::ServiceUnavailable(_)));
    }
}
