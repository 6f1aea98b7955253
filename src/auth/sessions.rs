/**
 * Session Tokens
 *
 * This module creates and verifies the signed JWT tokens used for sessions.
 * Two token kinds exist, signed with distinct secrets and distinct TTLs:
 *
 * - Access tokens: short-lived, authorize ordinary API calls. Validity is
 *   purely signature + expiry; they are never persisted or checked against
 *   stored state.
 * - Refresh tokens: long-lived, only used to mint new access tokens. They
 *   are additionally required to match the value stored on the user record,
 *   which is what makes logout and rotation effective server-side.
 *
 * The distinct secrets mean a leaked access token can never be replayed as
 * a refresh token.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::server::config::AuthConfig;

/// Token verification failure
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature, expiry or decode failure from the JWT layer
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token verified cryptographically but carries the wrong role tag
    #[error("wrong token kind")]
    WrongKind,
}

/// Token role tag embedded in the claims
///
/// Checked on verification in addition to the signature, so a token signed
/// with the right secret but carrying the wrong role is still rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued to
    pub sub: String,
    /// Token role (access vs refresh)
    pub kind: TokenKind,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn create_token(
    secret: &str,
    user_id: &str,
    kind: TokenKind,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        kind,
        exp: now + ttl_secs,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

fn verify_token(secret: &str, token: &str, kind: TokenKind) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    if token_data.claims.kind != kind {
        return Err(TokenError::WrongKind);
    }
    Ok(token_data.claims)
}

/// Create a short-lived access token for a user
pub fn create_access_token(
    config: &AuthConfig,
    user_id: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token(
        &config.access_secret,
        user_id,
        TokenKind::Access,
        config.access_ttl.as_secs(),
    )
}

/// Create a long-lived refresh token for a user
pub fn create_refresh_token(
    config: &AuthConfig,
    user_id: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token(
        &config.refresh_secret,
        user_id,
        TokenKind::Refresh,
        config.refresh_ttl.as_secs(),
    )
}

/// Verify an access token and return its claims
///
/// Fails with `ExpiredSignature` past the expiry window, `InvalidSignature`
/// for a token signed with another secret, and a decode error for anything
/// that is not a well-formed token.
pub fn verify_access_token(config: &AuthConfig, token: &str) -> Result<Claims, TokenError> {
    verify_token(&config.access_secret, token, TokenKind::Access)
}

/// Verify a refresh token and return its claims
///
/// Cryptographic validity only; the caller is responsible for comparing the
/// token against the value stored on the user record.
pub fn verify_refresh_token(config: &AuthConfig, token: &str) -> Result<Claims, TokenError> {
    verify_token(&config.refresh_secret, token, TokenKind::Refresh)
}
