use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, NullOrdering, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::UpdateOutcome},
    food::{
        entities::{Food, FoodDetails, FoodStatus},
        ports::FoodRepository,
        value_objects::{FoodSortOrder, GetFoodsFilter},
    },
    food_request::entities::{FoodRequest, Requester},
};
use crate::entity::{
    food_requests::{ActiveModel as FoodRequestActiveModel, Entity as FoodRequestEntity},
    foods::{ActiveModel as FoodActiveModel, Column as FoodColumn, Entity as FoodEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresFoodRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn find_locked(txn: &DatabaseTransaction, food_id: Uuid) -> Result<Option<Food>, CoreError> {
    let food = FoodEntity::find_by_id(food_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(|e| {
            error!("Failed to lock food: {}", e);
            CoreError::InternalServerError
        })?
        .map(Food::from);

    Ok(food)
}

async fn rollback(txn: DatabaseTransaction) -> Result<(), CoreError> {
    txn.rollback().await.map_err(|e| {
        error!("Failed to roll back transaction: {}", e);
        CoreError::InternalServerError
    })
}

impl FoodRepository for PostgresFoodRepository {
    async fn create_food(&self, food: Food) -> Result<Food, CoreError> {
        let created_food = FoodEntity::insert(FoodActiveModel::from(food))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(Food::from)
            .map_err(|e| {
                error!("Failed to create food: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_food)
    }

    async fn fetch_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        let mut query = FoodEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(FoodColumn::Status.eq(status.as_str()));
        }

        if let Some(email) = filter.email {
            query = query.filter(FoodColumn::Email.eq(email));
        }

        // Missing dates sort lowest in both directions.
        if let Some(sort) = filter.sort {
            let (order, nulls) = match sort {
                FoodSortOrder::Asc => (Order::Asc, NullOrdering::First),
                FoodSortOrder::Desc => (Order::Desc, NullOrdering::Last),
            };
            query = query
                .order_by_with_nulls(FoodColumn::Date, order.clone(), nulls)
                .order_by(FoodColumn::Id, order);
        }

        let foods = query
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch foods: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Food::from)
            .collect::<Vec<Food>>();

        Ok(foods)
    }

    async fn get_food_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        let food = FoodEntity::find_by_id(food_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get food by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Food::from);

        Ok(food)
    }

    async fn upsert_food_details(
        &self,
        food_id: Uuid,
        details: FoodDetails,
    ) -> Result<UpdateOutcome, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin food update: {}", e);
            CoreError::InternalServerError
        })?;

        // Concurrent upserts of the same new id serialize on the primary key here.
        let inserted = FoodEntity::insert(FoodActiveModel::from(Food::upserted(
            food_id,
            details.clone(),
        )))
        .on_conflict(OnConflict::column(FoodColumn::Id).do_nothing().to_owned())
        .exec_without_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to upsert food: {}", e);
            CoreError::InternalServerError
        })?;

        let outcome = if inserted > 0 {
            UpdateOutcome::upserted(food_id)
        } else {
            match find_locked(&txn, food_id).await? {
                // deleted between the insert attempt and the lock
                None => UpdateOutcome::unmatched(),
                Some(mut food) => {
                    let modified = food.replace_details(details);

                    if modified {
                        let details = food.details;
                        FoodEntity::update_many()
                            .col_expr(FoodColumn::FoodName, Expr::value(details.food_name))
                            .col_expr(FoodColumn::Quantity, Expr::value(details.quantity))
                            .col_expr(FoodColumn::Date, Expr::value(details.date))
                            .col_expr(FoodColumn::Location, Expr::value(details.location))
                            .col_expr(FoodColumn::Photo, Expr::value(details.photo))
                            .col_expr(FoodColumn::Notes, Expr::value(details.notes))
                            .col_expr(
                                FoodColumn::UpdatedAt,
                                Expr::value(food.updated_at.fixed_offset()),
                            )
                            .filter(FoodColumn::Id.eq(food_id))
                            .exec(&txn)
                            .await
                            .map_err(|e| {
                                error!("Failed to update food: {}", e);
                                CoreError::InternalServerError
                            })?;
                    }

                    UpdateOutcome::matched(modified)
                }
            }
        };

        txn.commit().await.map_err(|e| {
            error!("Failed to commit food update: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(outcome)
    }

    async fn delete_food(&self, food_id: Uuid) -> Result<u64, CoreError> {
        let result = FoodEntity::delete_by_id(food_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete food: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn request_food(
        &self,
        food_id: Uuid,
        requester: Requester,
    ) -> Result<Option<FoodRequest>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin food claim: {}", e);
            CoreError::InternalServerError
        })?;

        // The snapshot is taken from the locked row, so it reflects the item as claimed.
        let Some(food) = find_locked(&txn, food_id)
            .await?
            .filter(Food::is_available)
        else {
            rollback(txn).await?;
            return Ok(None);
        };
        let request = FoodRequest::snapshot(&food, requester);

        let updated = FoodEntity::update_many()
            .col_expr(
                FoodColumn::Status,
                Expr::value(FoodStatus::Requested.as_str()),
            )
            .col_expr(FoodColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(FoodColumn::Id.eq(food_id))
            .filter(FoodColumn::Status.eq(FoodStatus::Available.as_str()))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to mark food as requested: {}", e);
                CoreError::InternalServerError
            })?;

        if updated.rows_affected == 0 {
            rollback(txn).await?;
            return Ok(None);
        }

        let created_request = FoodRequestEntity::insert(FoodRequestActiveModel::from(request))
            .exec_with_returning(&txn)
            .await
            .map(FoodRequest::from)
            .map_err(|e| {
                error!("Failed to record food request: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit food claim: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Some(created_request))
    }
}
