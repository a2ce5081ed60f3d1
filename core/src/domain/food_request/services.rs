use tracing::info;

use crate::domain::{
    authentication::{ports::TokenCodec, value_objects::Identity},
    common::{
        entities::app_errors::CoreError, policies::ensure_policy, services::Service,
        value_objects::InsertOutcome,
    },
    food::ports::FoodRepository,
    food_request::{
        entities::{FoodRequest, FoodRequestConfig},
        ports::{FoodRequestPolicy, FoodRequestRepository, FoodRequestService},
        value_objects::{CreateFoodRequestInput, GetFoodRequestsFilter},
    },
    health::ports::HealthCheckRepository,
};

impl<F, FR, HC, T> FoodRequestService for Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    async fn create_food_request(
        &self,
        identity: Option<Identity>,
        input: CreateFoodRequestInput,
    ) -> Result<InsertOutcome, CoreError> {
        let mut requester = input.requester;
        if let Some(identity) = identity {
            requester.user_email = Some(identity.email);
        }

        let request = FoodRequest::new(FoodRequestConfig {
            food_id: input.food_id,
            requester,
            details: input.details,
            donor: input.donor,
        });

        let created = self
            .food_request_repository
            .create_food_request(request)
            .await?;
        info!(request_id = %created.id, "food request recorded");

        Ok(InsertOutcome::new(created.id))
    }

    async fn get_food_requests(&self) -> Result<Vec<FoodRequest>, CoreError> {
        self.food_request_repository
            .fetch_food_requests(GetFoodRequestsFilter::default())
            .await
    }

    async fn get_food_requests_by_requester(
        &self,
        identity: Identity,
        user_email: String,
    ) -> Result<Vec<FoodRequest>, CoreError> {
        ensure_policy(
            self.policy.can_view_requests_of(&identity, &user_email).await,
            "cannot list requests of another user",
        )?;

        self.food_request_repository
            .fetch_food_requests(GetFoodRequestsFilter {
                user_email: Some(user_email),
            })
            .await
    }
}
