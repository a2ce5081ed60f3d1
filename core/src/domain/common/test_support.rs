use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use chrono::Duration;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError, services::Service, value_objects::UpdateOutcome,
        },
        food::{
            entities::{Food, FoodDetails},
            ports::FoodRepository,
            value_objects::{FoodSortOrder, GetFoodsFilter},
        },
        food_request::{
            entities::{FoodRequest, Requester},
            ports::FoodRequestRepository,
            value_objects::GetFoodRequestsFilter,
        },
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    },
    infrastructure::jwt::Hs256TokenCodec,
};

pub(crate) type TestService = Service<InMemoryStore, InMemoryStore, InMemoryStore, Hs256TokenCodec>;

/// Service wired to a shared in-memory store, plus a handle on that store.
pub(crate) fn test_service() -> (TestService, InMemoryStore) {
    let store = InMemoryStore::default();
    let service = Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Hs256TokenCodec::new("test-secret", Duration::hours(5)),
    );

    (service, store)
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    foods: Arc<Mutex<Vec<Food>>>,
    requests: Arc<Mutex<Vec<FoodRequest>>>,
    fail_next_request_food: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub(crate) fn requests(&self) -> Vec<FoodRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Makes the next conditional claim write observe a concurrent change.
    pub(crate) fn fail_next_request_food(&self) {
        self.fail_next_request_food.store(true, Ordering::SeqCst);
    }
}

impl FoodRepository for InMemoryStore {
    async fn create_food(&self, food: Food) -> Result<Food, CoreError> {
        self.foods.lock().unwrap().push(food.clone());
        Ok(food)
    }

    async fn fetch_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        let mut foods: Vec<Food> = self
            .foods
            .lock()
            .unwrap()
            .iter()
            .filter(|f| filter.status.is_none_or(|status| f.status == Some(status)))
            .filter(|f| {
                filter
                    .email
                    .as_ref()
                    .is_none_or(|email| f.donor.email.as_ref() == Some(email))
            })
            .cloned()
            .collect();

        if let Some(sort) = filter.sort {
            // None orders first, matching NULLS FIRST / NULLS LAST per direction.
            foods.sort_by(|a, b| {
                (a.details.date.as_ref(), a.id).cmp(&(b.details.date.as_ref(), b.id))
            });
            if sort == FoodSortOrder::Desc {
                foods.reverse();
            }
        }

        Ok(foods)
    }

    async fn get_food_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        Ok(self
            .foods
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == food_id)
            .cloned())
    }

    async fn upsert_food_details(
        &self,
        food_id: Uuid,
        details: FoodDetails,
    ) -> Result<UpdateOutcome, CoreError> {
        let mut foods = self.foods.lock().unwrap();
        match foods.iter_mut().find(|f| f.id == food_id) {
            Some(food) => Ok(UpdateOutcome::matched(food.replace_details(details))),
            None => {
                foods.push(Food::upserted(food_id, details));
                Ok(UpdateOutcome::upserted(food_id))
            }
        }
    }

    async fn delete_food(&self, food_id: Uuid) -> Result<u64, CoreError> {
        let mut foods = self.foods.lock().unwrap();
        let before = foods.len();
        foods.retain(|f| f.id != food_id);
        Ok((before - foods.len()) as u64)
    }

    async fn request_food(
        &self,
        food_id: Uuid,
        requester: Requester,
    ) -> Result<Option<FoodRequest>, CoreError> {
        if self.fail_next_request_food.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }

        let mut foods = self.foods.lock().unwrap();
        let Some(food) = foods.iter_mut().find(|f| f.id == food_id) else {
            return Ok(None);
        };
        let request = FoodRequest::snapshot(food, requester);
        if !food.mark_requested() {
            return Ok(None);
        }

        self.requests.lock().unwrap().push(request.clone());
        Ok(Some(request))
    }
}

impl FoodRequestRepository for InMemoryStore {
    async fn create_food_request(&self, request: FoodRequest) -> Result<FoodRequest, CoreError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn fetch_food_requests(
        &self,
        filter: GetFoodRequestsFilter,
    ) -> Result<Vec<FoodRequest>, CoreError> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                filter
                    .user_email
                    .as_ref()
                    .is_none_or(|email| r.requester.user_email.as_ref() == Some(email))
            })
            .cloned()
            .collect())
    }
}

impl HealthCheckRepository for InMemoryStore {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus::up())
    }
}
