use crate::domain::{
    authentication::ports::TokenCodec,
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    food_request::ports::FoodRequestRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

impl<F, FR, HC, T> HealthCheckService for Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
