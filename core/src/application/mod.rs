use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{AuthConfig, RescueConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        food::PostgresFoodRepository,
        food_request::PostgresFoodRequestRepository,
        health::PostgresHealthCheckRepository,
        jwt::Hs256TokenCodec,
    },
};

pub type RescueService = Service<
    PostgresFoodRepository,
    PostgresFoodRequestRepository,
    PostgresHealthCheckRepository,
    Hs256TokenCodec,
>;

/// Connects to Postgres, applies migrations and wires the service.
pub async fn create_service(
    config: RescueConfig,
) -> Result<(RescueService, Postgres), anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let service = build_service(postgres.get_db(), &config.auth);

    Ok((service, postgres))
}

/// Wires the service over an existing connection.
pub fn build_service(db: Arc<DatabaseConnection>, auth: &AuthConfig) -> RescueService {
    Service::new(
        PostgresFoodRepository::new(db.clone()),
        PostgresFoodRequestRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        Hs256TokenCodec::new(&auth.access_token_secret, auth.token_ttl),
    )
}
