/**
 * API Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers and the
 * authentication middleware. Every failure a handler can produce is
 * classified into one of these variants and converted to an HTTP response.
 *
 * # Error Categories
 *
 * - Client errors carry a message that is safe to return to the caller
 *   (`BadRequest`, `Unauthenticated`, `InvalidCredentials`, `Forbidden`,
 *   `NotFound`, `Conflict`, `InvalidToken`).
 * - Internal errors wrap a source error from the database, the password
 *   hasher or token issuance. Their detail is logged server-side and never
 *   serialized into the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by API handlers and middleware
///
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`].
/// Database, password-hash and token-issuance failures convert into the
/// internal variants through `From`, so handlers can use `?` on store and
/// crypto calls without letting those errors escape unclassified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request (missing field, bad value)
    #[error("{0}")]
    BadRequest(String),

    /// No credential was presented where one is required
    #[error("{0}")]
    Unauthenticated(String),

    /// Password verification failed for a known user
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A credential was presented but rejected by the authentication gate
    #[error("{0}")]
    Forbidden(String),

    /// No record matches the request
    #[error("{0}")]
    NotFound(String),

    /// A unique field (email) is already taken
    #[error("{0}")]
    Conflict(String),

    /// A refresh token failed verification or no longer matches the stored value
    #[error("{0}")]
    InvalidToken(String),

    /// The database is not configured
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Persistence failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or comparison failure
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token issuance failure (verification failures are classified as
    /// `InvalidToken`/`Forbidden` at the call site, not here)
    #[error("token error: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenIssue(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for variants whose detail must not reach the client
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenIssue(_)
        )
    }

    /// Get the message to serialize into the response body
    ///
    /// Internal errors are masked with a generic message; the real cause is
    /// logged where the response is built.
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}
