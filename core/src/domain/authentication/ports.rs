use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{Jwt, JwtClaim},
        value_objects::{Identity, IdentityClaims},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn issue_token(
        &self,
        claims: IdentityClaims,
    ) -> impl Future<Output = Result<Jwt, CoreError>> + Send;

    fn verify_token(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}

/// Signs and verifies session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    fn sign(&self, claims: IdentityClaims) -> Result<Jwt, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
