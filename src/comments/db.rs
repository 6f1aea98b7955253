//! Database operations for comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A comment record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: String,
    pub message: String,
    /// ID of the user who wrote the comment
    pub sender_id: String,
    /// ID of the post the comment belongs to
    pub post_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new comment
pub async fn create_comment(
    pool: &SqlitePool,
    message: &str,
    sender_id: &str,
    post_id: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, message, sender_id, post_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, message, sender_id, post_id, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(message)
    .bind(sender_id)
    .bind(post_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get all comments
pub async fn get_all_comments(pool: &SqlitePool) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, message, sender_id, post_id, created_at, updated_at FROM comments ORDER BY created_at",
    )
    .fetch_all(pool)
    .await
}

/// Get a comment by ID
pub async fn get_comment_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, message, sender_id, post_id, created_at, updated_at FROM comments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get all comments on a post
pub async fn get_comments_by_post(
    pool: &SqlitePool,
    post_id: &str,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, message, sender_id, post_id, created_at, updated_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Update a comment's fields
pub async fn update_comment(
    pool: &SqlitePool,
    id: &str,
    message: &str,
    sender_id: &str,
    post_id: &str,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET message = $1, sender_id = $2, post_id = $3, updated_at = $4
        WHERE id = $5
        RETURNING id, message, sender_id, post_id, created_at, updated_at
        "#,
    )
    .bind(message)
    .bind(sender_id)
    .bind(post_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!().run(&pool).await.expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_comment_round_trip_and_filter() {
        let pool = setup_pool().await;
        let comment = create_comment(&pool, "hi", "user-1", "post-1").await.unwrap();
        create_comment(&pool, "again", "user-1", "post-1").await.unwrap();
        create_comment(&pool, "elsewhere", "user-2", "post-2").await.unwrap();

        let fetched = get_comment_by_id(&pool, &comment.id).await.unwrap().unwrap();
        assert_eq!(fetched.message, "hi");

        assert_eq!(get_comments_by_post(&pool, "post-1").await.unwrap().len(), 2);
        assert_eq!(get_all_comments(&pool).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_comment() {
        let pool = setup_pool().await;
        let comment = create_comment(&pool, "old", "user-1", "post-1").await.unwrap();

        let updated = update_comment(&pool, &comment.id, "new", "user-1", "post-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.message, "new");

        assert!(update_comment(&pool, "missing", "x", "y", "z").await.unwrap().is_none());
    }
}
