use tracing::{debug, warn};

use crate::domain::{
    authentication::{
        entities::Jwt,
        ports::{AuthService, TokenCodec},
        value_objects::{Identity, IdentityClaims},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    food_request::ports::FoodRequestRepository,
    health::ports::HealthCheckRepository,
};

impl<F, FR, HC, T> AuthService for Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    async fn issue_token(&self, claims: IdentityClaims) -> Result<Jwt, CoreError> {
        debug!(email = %claims.email, "issuing session token");
        self.token_codec.sign(claims)
    }

    async fn verify_token(&self, token: String) -> Result<Identity, CoreError> {
        let claim = self.token_codec.verify(&token).map_err(|e| {
            warn!("Rejected session token: {}", e);
            e
        })?;

        Ok(Identity::from(claim))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::common::test_support::test_service;

    fn claims(email: &str) -> IdentityClaims {
        IdentityClaims {
            email: email.to_string(),
            name: Some("Alice".to_string()),
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_issued_token_verifies_to_same_identity() {
        let (service, _) = test_service();

        let jwt = service.issue_token(claims("a@x.com")).await.unwrap();
        let identity = service.verify_token(jwt.token).await.unwrap();

        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_token_lifetime_is_applied() {
        let (service, _) = test_service();

        let jwt = service.issue_token(claims("a@x.com")).await.unwrap();
        let remaining = jwt.expires_at - chrono::Utc::now();

        assert!(remaining > Duration::hours(4));
        assert!(remaining <= Duration::hours(5));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let (service, _) = test_service();

        let err = service
            .verify_token("not.a.token".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidToken);
    }
}
