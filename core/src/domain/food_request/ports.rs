use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, value_objects::InsertOutcome},
    food_request::{
        entities::FoodRequest,
        value_objects::{CreateFoodRequestInput, GetFoodRequestsFilter},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodRequestService: Send + Sync {
    fn create_food_request(
        &self,
        identity: Option<Identity>,
        input: CreateFoodRequestInput,
    ) -> impl Future<Output = Result<InsertOutcome, CoreError>> + Send;

    fn get_food_requests(&self) -> impl Future<Output = Result<Vec<FoodRequest>, CoreError>> + Send;

    fn get_food_requests_by_requester(
        &self,
        identity: Identity,
        user_email: String,
    ) -> impl Future<Output = Result<Vec<FoodRequest>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodRequestRepository: Send + Sync {
    fn create_food_request(
        &self,
        request: FoodRequest,
    ) -> impl Future<Output = Result<FoodRequest, CoreError>> + Send;

    fn fetch_food_requests(
        &self,
        filter: GetFoodRequestsFilter,
    ) -> impl Future<Output = Result<Vec<FoodRequest>, CoreError>> + Send;
}

pub trait FoodRequestPolicy: Send + Sync {
    fn can_view_requests_of(
        &self,
        identity: &Identity,
        user_email: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
