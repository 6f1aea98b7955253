/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations, including the
 * stored refresh token that backs server-side session revocation.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// User struct representing a user in the database
///
/// `password_hash` and `refresh_token` are never serialized; clients only
/// ever see the remaining fields.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store at creation
    pub id: String,
    /// Display name
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Currently honored refresh token, if any. A user has zero or one live
    /// refresh token at a time; login and refresh replace it, logout clears it.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, refresh_token, created_at, updated_at";

/// Create a new user with no active refresh token
pub async fn create_user(
    pool: &SqlitePool,
    username: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, username, email, password_hash, refresh_token, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NULL, $5, $6)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get all users
pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await
}

/// Set (or clear, with `None`) the stored refresh token unconditionally
///
/// Used on register and login. Overwriting the previous value implicitly
/// invalidates any refresh token issued earlier for this user.
pub async fn set_refresh_token(
    pool: &SqlitePool,
    user_id: &str,
    token: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET refresh_token = $1, updated_at = $2 WHERE id = $3")
        .bind(token)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Replace the stored refresh token only if it still equals `old`
///
/// Single conditional statement; a concurrent login, refresh or logout that
/// already replaced the stored value makes this a no-op. Returns whether the
/// write landed.
pub async fn rotate_refresh_token(
    pool: &SqlitePool,
    user_id: &str,
    old: &str,
    new: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET refresh_token = $1, updated_at = $2 WHERE id = $3 AND refresh_token = $4",
    )
    .bind(new)
    .bind(Utc::now())
    .bind(user_id)
    .bind(old)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Clear the stored refresh token only if it equals `token`
///
/// Returns whether a row was cleared. A second call with the same token
/// finds nothing to clear, which is what makes logout single-use.
pub async fn clear_refresh_token(
    pool: &SqlitePool,
    user_id: &str,
    token: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET refresh_token = NULL, updated_at = $1 WHERE id = $2 AND refresh_token = $3",
    )
    .bind(Utc::now())
    .bind(user_id)
    .bind(token)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Update a user's profile fields
///
/// Only the display name and email are mutable through this path; the
/// password hash and refresh token have their own operations.
pub async fn update_profile(
    pool: &SqlitePool,
    id: &str,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET username = $1, email = $2, updated_at = $3
        WHERE id = $4
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(username)
    .bind(email)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a user, returning the deleted row if it existed
pub async fn delete_user(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
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

    async fn insert_user(pool: &SqlitePool, email: &str) -> User {
        create_user(
            pool,
            "tester".to_string(),
            email.to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = setup_pool().await;
        let user = insert_user(&pool, "a@example.com").await;
        assert!(user.refresh_token.is_none());

        let by_email = get_user_by_email(&pool, "a@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, user.id);

        let by_id = get_user_by_id(&pool, &user.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "a@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let pool = setup_pool().await;
        insert_user(&pool, "a@example.com").await;

        let result = create_user(
            &pool,
            "other".to_string(),
            "a@example.com".to_string(),
            "hash2".to_string(),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_set_and_rotate_refresh_token() {
        let pool = setup_pool().await;
        let user = insert_user(&pool, "a@example.com").await;

        set_refresh_token(&pool, &user.id, Some("r1")).await.unwrap();
        let stored = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("r1"));

        // Rotation succeeds only against the current value
        assert!(rotate_refresh_token(&pool, &user.id, "r1", "r2").await.unwrap());
        assert!(!rotate_refresh_token(&pool, &user.id, "r1", "r3").await.unwrap());

        let stored = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_clear_refresh_token_is_single_use() {
        let pool = setup_pool().await;
        let user = insert_user(&pool, "a@example.com").await;
        set_refresh_token(&pool, &user.id, Some("r1")).await.unwrap();

        assert!(clear_refresh_token(&pool, &user.id, "r1").await.unwrap());
        assert!(!clear_refresh_token(&pool, &user.id, "r1").await.unwrap());

        let stored = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert!(stored.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_and_delete() {
        let pool = setup_pool().await;
        let user = insert_user(&pool, "a@example.com").await;

        let updated = update_profile(&pool, &user.id, "renamed", "b@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.email, "b@example.com");

        let deleted = delete_user(&pool, &user.id).await.unwrap();
        assert_eq!(deleted.unwrap().id, user.id);
        assert!(get_user_by_id(&pool, &user.id).await.unwrap().is_none());

        let missing = delete_user(&pool, &user.id).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_serialized_user_hides_secrets() {
        let pool = setup_pool().await;
        let user = insert_user(&pool, "a@example.com").await;

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refresh_token").is_none());
        assert!(json.get("email").is_some());
    }
}
