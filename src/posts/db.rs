//! Database operations for posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A post record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// ID of the user who created the post
    pub sender_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new post
pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    sender_id: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, sender_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, content, sender_id, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(content)
    .bind(sender_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get all posts
pub async fn get_all_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "SELECT id, title, content, sender_id, created_at, updated_at FROM posts ORDER BY created_at",
    )
    .fetch_all(pool)
    .await
}

/// Get a post by ID
pub async fn get_post_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "SELECT id, title, content, sender_id, created_at, updated_at FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get all posts by a sender
pub async fn get_posts_by_sender(
    pool: &SqlitePool,
    sender_id: &str,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, sender_id, created_at, updated_at
        FROM posts
        WHERE sender_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(sender_id)
    .fetch_all(pool)
    .await
}

/// Update a post's title and content
pub async fn update_post(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    content: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, updated_at = $3
        WHERE id = $4
        RETURNING id, title, content, sender_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
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
    async fn test_post_round_trip() {
        let pool = setup_pool().await;
        let post = create_post(&pool, "Title", "Content", "user-1").await.unwrap();

        let fetched = get_post_by_id(&pool, &post.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Title");
        assert_eq!(fetched.sender_id, "user-1");

        assert!(get_post_by_id(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_posts_by_sender() {
        let pool = setup_pool().await;
        create_post(&pool, "A", "a", "user-1").await.unwrap();
        create_post(&pool, "B", "b", "user-1").await.unwrap();
        create_post(&pool, "C", "c", "user-2").await.unwrap();

        let posts = get_posts_by_sender(&pool, "user-1").await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(get_all_posts(&pool).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_post() {
        let pool = setup_pool().await;
        let post = create_post(&pool, "Old", "old", "user-1").await.unwrap();

        let updated = update_post(&pool, &post.id, "New", "new").await.unwrap().unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "new");

        assert!(update_post(&pool, "missing", "x", "y").await.unwrap().is_none());
    }
}
