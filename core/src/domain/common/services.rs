use std::sync::Arc;

use crate::domain::{
    authentication::ports::TokenCodec, common::policies::RescuePolicy,
    food::ports::FoodRepository, food_request::ports::FoodRequestRepository,
    health::ports::HealthCheckRepository,
};

/// Aggregate that implements every domain service over its injected ports.
pub struct Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    pub(crate) food_repository: Arc<F>,
    pub(crate) food_request_repository: Arc<FR>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) token_codec: Arc<T>,
    pub(crate) policy: Arc<RescuePolicy>,
}

impl<F, FR, HC, T> Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    pub fn new(
        food_repository: F,
        food_request_repository: FR,
        health_check_repository: HC,
        token_codec: T,
    ) -> Self {
        Self {
            food_repository: Arc::new(food_repository),
            food_request_repository: Arc::new(food_request_repository),
            health_check_repository: Arc::new(health_check_repository),
            token_codec: Arc::new(token_codec),
            policy: Arc::new(RescuePolicy::new()),
        }
    }
}

impl<F, FR, HC, T> Clone for Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    fn clone(&self) -> Self {
        Self {
            food_repository: Arc::clone(&self.food_repository),
            food_request_repository: Arc::clone(&self.food_request_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            token_codec: Arc::clone(&self.token_codec),
            policy: Arc::clone(&self.policy),
        }
    }
}
