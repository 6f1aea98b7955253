/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration: the
 * optional SQLite database connection and the token configuration used by
 * the session layer.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables once at startup into
 * explicit structs. Nothing below this module reads the environment; the
 * token codec and the handlers receive an [`AuthConfig`] value.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. If the
 * database fails to initialize it is set to `None` and the server continues
 * without it (handlers respond 503).
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Token configuration for the session layer
///
/// Access and refresh tokens are signed with distinct secrets and live for
/// distinct durations. A leaked access token can therefore never be replayed
/// as a refresh token, and its usefulness is bounded by the short TTL.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    pub access_secret: String,
    /// Secret used to sign and verify refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime (minutes-scale)
    pub access_ttl: Duration,
    /// Refresh token lifetime (days-scale)
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Build a configuration from explicit values
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Load the token configuration from the environment
    ///
    /// Variables:
    /// - `JWT_SECRET` - access token secret
    /// - `JWT_REFRESH_SECRET` - refresh token secret
    /// - `JWT_EXPIRES_IN_MINUTES` - access token TTL (default 15)
    /// - `JWT_REFRESH_EXPIRES_IN_DAYS` - refresh token TTL (default 7)
    ///
    /// Missing secrets fall back to development defaults with a warning;
    /// unparsable TTLs fall back to the defaults.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "dev-access-secret-change-in-production".to_string()
        });
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_REFRESH_SECRET not set, using development default");
            "dev-refresh-secret-change-in-production".to_string()
        });

        let access_minutes = read_env_u64("JWT_EXPIRES_IN_MINUTES", 15);
        let refresh_days = read_env_u64("JWT_REFRESH_EXPIRES_IN_DAYS", 7);

        Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::from_secs(access_minutes * 60),
            refresh_ttl: Duration::from_secs(refresh_days * 24 * 60 * 60),
        }
    }
}

fn read_env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value.parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!("{} is not a number, using default {}", name, default);
            default
        }),
        Err(_) => default,
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (e.g. `sqlite://inkpost.db`)
/// 2. Creates a SQLite connection pool, creating the file if missing
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let options = match SqliteConnectOptions::from_str(&database_url) {
        Ok(options) => options.create_if_missing(true),
        Err(e) => {
            tracing::error!("Invalid DATABASE_URL: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    let pool = match SqlitePoolOptions::new().connect_with(options).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
