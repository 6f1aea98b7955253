/**
 * Post Handlers
 *
 * HTTP handlers for the post CRUD endpoints. All routes sit behind the
 * authentication middleware.
 *
 * # Routes
 *
 * - `POST /post` - Create a post
 * - `GET /post/data` - List all posts
 * - `GET /post?sender=<user_id>` - List posts by sender
 * - `GET /post/{post_id}` - Get a post by ID
 * - `PUT /post/{post_id}` - Update a post
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::posts::db;
use crate::posts::db::Post;
use crate::server::state::require_db;

/// Request body for creating a post; every field is required
#[derive(Deserialize, Serialize, Debug)]
pub struct AddPostRequest {
    pub title: String,
    pub content: String,
    pub sender_id: String,
}

/// Request body for updating a post; absent fields are left unchanged
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Query parameters for listing posts by sender
#[derive(Deserialize, Debug)]
pub struct SenderQuery {
    pub sender: Option<String>,
}

/// Create a new post
pub async fn add_post(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<AddPostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let pool = require_db(pool)?;

    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Post data missing".to_string()));
    }

    let post = db::create_post(&pool, &request.title, &request.content, &request.sender_id).await?;
    tracing::info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts
pub async fn get_all_posts(
    State(pool): State<Option<SqlitePool>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let pool = require_db(pool)?;
    let posts = db::get_all_posts(&pool).await?;
    Ok(Json(posts))
}

/// Get a post by ID
pub async fn get_post_by_id(
    State(pool): State<Option<SqlitePool>>,
    Path(post_id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let pool = require_db(pool)?;
    let post = db::get_post_by_id(&pool, &post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;
    Ok(Json(post))
}

/// List posts by sender (`?sender=<user_id>`)
pub async fn get_posts_by_sender(
    State(pool): State<Option<SqlitePool>>,
    Query(query): Query<SenderQuery>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let pool = require_db(pool)?;
    let sender = query
        .sender
        .ok_or_else(|| ApiError::BadRequest("Sender ID is required".to_string()))?;

    let posts = db::get_posts_by_sender(&pool, &sender).await?;
    Ok(Json(posts))
}

/// Update a post's title and/or content
pub async fn update_post(
    State(pool): State<Option<SqlitePool>>,
    Path(post_id): Path<String>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let pool = require_db(pool)?;

    let existing = db::get_post_by_id(&pool, &post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    let title = request.title.unwrap_or(existing.title);
    let content = request.content.unwrap_or(existing.content);

    let updated = db::update_post(&pool, &post_id, &title, &content)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    Ok(Json(updated))
}
