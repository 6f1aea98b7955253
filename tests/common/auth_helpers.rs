//! Authentication test helpers

use std::time::Duration;

use axum_test::TestServer;
use serde_json::Value;

use inkpost::{AppState, AuthConfig};

use super::database::TestDatabase;

/// Token configuration used by the test servers
pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new(
        "test-access-secret",
        "test-refresh-secret",
        Duration::from_secs(15 * 60),
        Duration::from_secs(7 * 24 * 60 * 60),
    )
}

/// Application state over the given test database
pub fn app_state(db: &TestDatabase) -> AppState {
    AppState {
        db_pool: Some(db.pool().clone()),
        auth: test_auth_config(),
    }
}

/// Credentials and tokens of a user registered through the HTTP surface
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Register a user through POST /auth/register and return its tokens
pub async fn register_user(server: &TestServer, email: &str, password: &str) -> RegisteredUser {
    let response = server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": "tester",
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201, "registration failed");

    let body: Value = response.json();
    RegisteredUser {
        id: body["user"]["id"].as_str().unwrap().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        access_token: body["accessToken"].as_str().unwrap().to_string(),
        refresh_token: body["refreshToken"].as_str().unwrap().to_string(),
    }
}
