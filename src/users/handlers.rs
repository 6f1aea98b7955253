/**
 * User Handlers
 *
 * HTTP handlers for the user CRUD endpoints. All routes sit behind the
 * authentication middleware and only ever return the safe user view; the
 * password hash and the stored refresh token are never serialized.
 *
 * # Routes
 *
 * - `GET /user/data` - List all users
 * - `GET /user/{user_id}` - Get a user by ID
 * - `POST /user` - Create a user (administrative; password is hashed)
 * - `PUT /user/{user_id}` - Update a user's profile fields
 * - `DELETE /user/{user_id}` - Delete a user
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users;
use crate::error::ApiError;
use crate::server::state::require_db;

/// Request body for creating a user; every field is required
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for updating a user
///
/// Only the profile fields are reachable from this endpoint; the password
/// hash and refresh token cannot be written through it.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// List all users
pub async fn get_all_users(
    State(pool): State<Option<SqlitePool>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let pool = require_db(pool)?;
    let users = users::get_all_users(&pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by ID
pub async fn get_user_by_id(
    State(pool): State<Option<SqlitePool>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = require_db(pool)?;
    let user = users::get_user_by_id(&pool, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a user
///
/// Unlike registration this issues no tokens; it exists for administrative
/// seeding of accounts. The password is hashed exactly as in registration.
pub async fn create_user(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let pool = require_db(pool)?;

    if users::get_user_by_email(&pool, &request.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let user = users::create_user(&pool, request.username, request.email, password_hash).await?;
    tracing::info!("User created: {}", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update a user's profile fields
pub async fn update_user(
    State(pool): State<Option<SqlitePool>>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = require_db(pool)?;

    let existing = users::get_user_by_id(&pool, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let email = request.email.unwrap_or_else(|| existing.email.clone());
    if email != existing.email && users::get_user_by_email(&pool, &email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }
    let username = request.username.unwrap_or(existing.username);

    let updated = users::update_profile(&pool, &user_id, &username, &email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(updated)))
}

/// Delete a user
pub async fn delete_user(
    State(pool): State<Option<SqlitePool>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = require_db(pool)?;
    let deleted = users::delete_user(&pool, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    tracing::info!("User deleted: {}", deleted.id);
    Ok(Json(UserResponse::from(deleted)))
}
