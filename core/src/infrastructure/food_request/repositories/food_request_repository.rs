use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_request::{
        entities::FoodRequest, ports::FoodRequestRepository,
        value_objects::GetFoodRequestsFilter,
    },
};
use crate::entity::food_requests::{
    ActiveModel as FoodRequestActiveModel, Column as FoodRequestColumn,
    Entity as FoodRequestEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresFoodRequestRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresFoodRequestRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl FoodRequestRepository for PostgresFoodRequestRepository {
    async fn create_food_request(&self, request: FoodRequest) -> Result<FoodRequest, CoreError> {
        let created_request = FoodRequestEntity::insert(FoodRequestActiveModel::from(request))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(FoodRequest::from)
            .map_err(|e| {
                error!("Failed to create food request: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_request)
    }

    async fn fetch_food_requests(
        &self,
        filter: GetFoodRequestsFilter,
    ) -> Result<Vec<FoodRequest>, CoreError> {
        let mut query = FoodRequestEntity::find();

        if let Some(user_email) = filter.user_email {
            query = query.filter(FoodRequestColumn::UserEmail.eq(user_email));
        }

        let requests = query
            .order_by_asc(FoodRequestColumn::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch food requests: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(FoodRequest::from)
            .collect::<Vec<FoodRequest>>();

        Ok(requests)
    }
}
