//! # Authentication Module
//!
//! Resolves the caller of a request from an `Authorization: Bearer <jwt>`
//! header. Tokens are HS256-signed with the configured secret and carry the
//! user id, the admin flag and, for stylist accounts, the stylist id.
//!
//! Issuing tokens belongs to the identity service; [`encode_token`] exists
//! for tooling and tests.

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use salonbook_core::{errors::BookingError, models::user::CurrentUser};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// JWT claims understood by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Expiry as seconds since the Unix epoch
    pub exp: usize,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub stylist_id: Option<Uuid>,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            id: claims.sub,
            is_admin: claims.is_admin,
            stylist_id: claims.stylist_id,
        }
    }
}

/// Signs a token for `user` that expires after `ttl_seconds`.
pub fn encode_token(user: &CurrentUser, secret: &str, ttl_seconds: u64) -> eyre::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        sub: user.id,
        exp: (now + ttl_seconds) as usize,
        is_admin: user.is_admin,
        stylist_id: user.stylist_id,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Error signing token: {}", e))
}

/// Verifies signature and expiry and returns the claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, BookingError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| BookingError::Authentication("Invalid or expired token".to_string()))
}

/// Extractor for the authenticated caller.
///
/// Rejects with 401 when the header is missing, malformed or carries an
/// invalid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                BookingError::Authentication("Missing authorization header".to_string())
            })?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                BookingError::Authentication("Expected a bearer token".to_string())
            })?;

        let claims = decode_token(token, &state.jwt_secret)?;
        Ok(AuthUser(claims.into()))
    }
}
