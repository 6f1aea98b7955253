/**
 * Comment Handlers
 *
 * HTTP handlers for the comment CRUD endpoints. All routes sit behind the
 * authentication middleware.
 *
 * # Routes
 *
 * - `GET /comments/data` - List comments, optionally filtered by post
 * - `GET /comments?post_id=<id>` - List comments on a post (filter required)
 * - `GET /comments/{comment_id}` - Get a comment by ID
 * - `POST /comments` - Create a comment
 * - `PUT /comments/{comment_id}` - Update a comment
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::comments::db;
use crate::comments::db::Comment;
use crate::error::ApiError;
use crate::server::state::require_db;

/// Request body for creating a comment; every field is required
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateCommentRequest {
    pub message: String,
    pub sender_id: String,
    pub post_id: String,
}

/// Request body for updating a comment; absent fields are left unchanged
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateCommentRequest {
    pub message: Option<String>,
    pub sender_id: Option<String>,
    pub post_id: Option<String>,
}

/// Query parameters for comment listings
#[derive(Deserialize, Debug)]
pub struct PostQuery {
    pub post_id: Option<String>,
}

/// List all comments, or only those on a post when `post_id` is given
pub async fn get_all_comments(
    State(pool): State<Option<SqlitePool>>,
    Query(query): Query<PostQuery>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let pool = require_db(pool)?;
    let comments = match query.post_id {
        Some(post_id) => db::get_comments_by_post(&pool, &post_id).await?,
        None => db::get_all_comments(&pool).await?,
    };
    Ok(Json(comments))
}

/// Get a comment by ID
pub async fn get_comment_by_id(
    State(pool): State<Option<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<Json<Comment>, ApiError> {
    let pool = require_db(pool)?;
    let comment = db::get_comment_by_id(&pool, &comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;
    Ok(Json(comment))
}

/// List comments on a post (`?post_id=<id>`, required)
pub async fn get_comments_by_post(
    State(pool): State<Option<SqlitePool>>,
    Query(query): Query<PostQuery>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let pool = require_db(pool)?;
    let post_id = query
        .post_id
        .ok_or_else(|| ApiError::BadRequest("Post ID is required".to_string()))?;

    let comments = db::get_comments_by_post(&pool, &post_id).await?;
    Ok(Json(comments))
}

/// Create a new comment
pub async fn create_comment(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let pool = require_db(pool)?;

    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    }

    let comment =
        db::create_comment(&pool, &request.message, &request.sender_id, &request.post_id).await?;
    tracing::info!("Comment created: {} on post {}", comment.id, comment.post_id);

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Update a comment
pub async fn update_comment(
    State(pool): State<Option<SqlitePool>>,
    Path(comment_id): Path<String>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let pool = require_db(pool)?;

    let existing = db::get_comment_by_id(&pool, &comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    let message = request.message.unwrap_or(existing.message);
    let sender_id = request.sender_id.unwrap_or(existing.sender_id);
    let post_id = request.post_id.unwrap_or(existing.post_id);

    let updated = db::update_comment(&pool, &comment_id, &message, &sender_id, &post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    Ok(Json(updated))
}
