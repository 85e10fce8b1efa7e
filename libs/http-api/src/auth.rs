//! Bearer-token sessions.
//!
//! The server issues HS256 tokens at login; every authenticated handler
//! takes a [`CurrentUser`] extractor argument, which verifies the
//! `Authorization: Bearer` header against the [`AuthTokens`] verifier
//! installed as a router extension. Handlers then pass the resolved user id
//! into the domain services explicitly.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::problem::{self, ProblemResponse};

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: Uuid,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// Issues and verifies session tokens with a shared HS256 secret.
pub struct AuthTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl AuthTokens {
    pub fn new(secret: &str, ttl_hours: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours: ttl_hours as i64,
        }
    }

    /// Issue a token for the given user.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.ttl_hours)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Issue)
    }

    /// Verify a token and return the user id it was issued for.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;
        Ok(data.claims.sub)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign session token")]
    Issue,
    #[error("invalid or expired session token")]
    Invalid,
}

/// The authenticated caller, resolved from the bearer token.
///
/// Extraction fails with a uniform 401 problem when the header is missing,
/// malformed, or the token does not verify.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tokens = parts
            .extensions
            .get::<Arc<AuthTokens>>()
            .cloned()
            .ok_or_else(problem::internal_error)?;

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(problem::unauthorized)?;

        let user_id = tokens
            .verify(bearer)
            .map_err(|_| problem::unauthorized())?;

        Ok(Self(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_roundtrip() {
        let tokens = AuthTokens::new("unit-test-secret", 1);
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn verify_rejects_garbage() {
        let tokens = AuthTokens::new("unit-test-secret", 1);
        assert!(tokens.verify("not-a-token").is_err());
    }

    #[test]
    fn verify_rejects_foreign_secret() {
        let a = AuthTokens::new("secret-a", 1);
        let b = AuthTokens::new("secret-b", 1);
        let token = a.issue(Uuid::new_v4()).unwrap();
        assert!(b.verify(&token).is_err());
    }
}
