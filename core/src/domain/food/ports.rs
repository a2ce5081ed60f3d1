use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{DeleteOutcome, InsertOutcome, UpdateOutcome},
    },
    food::{
        entities::{Food, FoodDetails},
        value_objects::{
            ClaimFoodInput, CreateFoodInput, FoodSortOrder, GetFoodsByOwnerInput, GetFoodsFilter,
            UpdateFoodInput,
        },
    },
    food_request::entities::{FoodRequest, Requester},
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn create_food(
        &self,
        identity: Option<Identity>,
        input: CreateFoodInput,
    ) -> impl Future<Output = Result<InsertOutcome, CoreError>> + Send;

    fn get_available_foods(
        &self,
        sort: FoodSortOrder,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn get_foods_by_owner(
        &self,
        identity: Identity,
        input: GetFoodsByOwnerInput,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn update_food(
        &self,
        input: UpdateFoodInput,
    ) -> impl Future<Output = Result<UpdateOutcome, CoreError>> + Send;

    fn delete_food(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<DeleteOutcome, CoreError>> + Send;

    /// Marks an available item as requested and records the request.
    fn claim_food(
        &self,
        identity: Option<Identity>,
        input: ClaimFoodInput,
    ) -> impl Future<Output = Result<InsertOutcome, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn create_food(&self, food: Food) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn fetch_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food_by_id(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    /// Overwrites the descriptive fields, inserting a fresh record when `food_id` is unknown.
    fn upsert_food_details(
        &self,
        food_id: Uuid,
        details: FoodDetails,
    ) -> impl Future<Output = Result<UpdateOutcome, CoreError>> + Send;

    fn delete_food(&self, food_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Locks the item, snapshots it for `requester`, flips it to requested and
    /// stores the snapshot, all in one transaction.
    ///
    /// Returns `None` and writes nothing when the item is missing or not available.
    fn request_food(
        &self,
        food_id: Uuid,
        requester: Requester,
    ) -> impl Future<Output = Result<Option<FoodRequest>, CoreError>> + Send;
}

pub trait FoodPolicy: Send + Sync {
    fn can_view_owned_foods(
        &self,
        identity: &Identity,
        owner_email: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
