//! Database test fixtures
//!
//! Provides an in-memory SQLite database with migrations applied. The pool
//! is pinned to a single connection because every connection to `:memory:`
//! would otherwise open its own empty database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh database and run all migrations
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
