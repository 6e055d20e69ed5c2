//! Token-based identity extraction
//!
//! Callers authenticate with an HS256 JWT in the `x-auth-token` header.
//! The token's `user.id` claim is the caller's [`OwnerId`].

use super::error::ApiError;
use super::routes::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use covenant_domain::OwnerId;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const AUTH_HEADER: &str = "x-auth-token";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token is not valid: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Token does not carry a user id")]
    MissingUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: UserClaim,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

/// Signs and verifies identity tokens with a shared secret
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a token for `owner` valid for `ttl`.
    pub fn issue(&self, owner: &OwnerId, ttl: Duration) -> Result<String, AuthError> {
        let claims = Claims {
            user: UserClaim {
                id: owner.to_string(),
            },
            exp: (Utc::now() + ttl).timestamp(),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify `token` and return the identity it carries.
    pub fn verify(&self, token: &str) -> Result<OwnerId, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)?;
        OwnerId::new(data.claims.user.id).map_err(|_| AuthError::MissingUser)
    }
}

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct Identity(pub OwnerId);

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingToken)?;

        state.auth.verify(token).map(Identity).map_err(|e| {
            debug!("Rejected token: {}", e);
            ApiError::InvalidToken
        })
    }
}
