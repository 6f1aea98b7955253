/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Token-carrying fields use camelCase on the wire
 * (`accessToken`, `refreshToken`); tokens are transported in response bodies,
 * and clients present the access token via the `Authorization` header.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
///
/// All fields are required.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub username: String,
    /// Email address; must be unique across all users
    pub email: String,
    /// Clear-text password (hashed before storage, at least 8 characters)
    pub password: String,
}

/// Login request
///
/// Both fields are required.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address the account was registered with
    pub email: String,
    /// Clear-text password (verified against the stored hash)
    pub password: String,
}

/// Refresh request
///
/// The token is optional at the type level so its absence can be reported
/// explicitly instead of as a deserialization failure.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Logout request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Response for register and login: a fresh token pair plus the user
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Short-lived access token
    pub access_token: String,
    /// Long-lived refresh token; the only value the server will honor for
    /// this user until the next login, refresh or logout
    pub refresh_token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Response for a successful refresh: the rotated token pair
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Plain acknowledgement response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// User response (without sensitive data)
///
/// Never includes the password hash or the stored refresh token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// Unique user ID
    pub id: String,
    /// Display name
    pub username: String,
    /// Email address
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
