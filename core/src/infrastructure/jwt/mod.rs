use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::error;

use crate::domain::{
    authentication::{
        entities::{Jwt, JwtClaim},
        ports::TokenCodec,
        value_objects::IdentityClaims,
    },
    common::entities::app_errors::CoreError,
};

/// HMAC-SHA256 session tokens signed with a shared secret.
#[derive(Clone)]
pub struct Hs256TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl Hs256TokenCodec {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn sign(&self, claims: IdentityClaims) -> Result<Jwt, CoreError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let claim = JwtClaim::new(claims, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claim, &self.encoding_key).map_err(
            |e| {
                error!("Failed to sign session token: {}", e);
                CoreError::InternalServerError
            },
        )?;

        Ok(Jwt { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => CoreError::InvalidToken,
            })
    }
}
