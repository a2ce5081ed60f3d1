use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    food::entities::{Donor, FoodDetails, FoodStatus},
    food_request::entities::Requester,
};

/// Ordering of the available listing on the `date` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodSortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct GetFoodsFilter {
    pub status: Option<FoodStatus>,
    pub email: Option<String>,
    pub sort: Option<FoodSortOrder>,
}

impl GetFoodsFilter {
    pub fn available(sort: FoodSortOrder) -> Self {
        Self {
            status: Some(FoodStatus::Available),
            email: None,
            sort: Some(sort),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateFoodInput {
    pub details: FoodDetails,
    pub donor: Donor,
    pub status: Option<FoodStatus>,
}

pub struct GetFoodsByOwnerInput {
    pub email: String,
}

pub struct UpdateFoodInput {
    pub food_id: Uuid,
    pub details: FoodDetails,
}

pub struct ClaimFoodInput {
    pub food_id: Uuid,
    pub requester: Requester,
}
