use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    food::entities::{Donor, Food, FoodDetails},
};

/// The person asking for a food item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub request_date: Option<String>,
    pub additional_notes: Option<String>,
}

/// Immutable record of a request. Food fields are copied, never resolved back
/// to the live item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub food_id: Option<Uuid>,
    #[serde(flatten)]
    pub requester: Requester,
    #[serde(flatten)]
    pub details: FoodDetails,
    #[serde(flatten)]
    pub donor: Donor,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct FoodRequestConfig {
    pub food_id: Option<Uuid>,
    pub requester: Requester,
    pub details: FoodDetails,
    pub donor: Donor,
}

impl FoodRequest {
    pub fn new(config: FoodRequestConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_id: config.food_id,
            requester: config.requester,
            details: config.details,
            donor: config.donor,
            created_at: now,
        }
    }

    /// Copies the item as it is right now.
    pub fn snapshot(food: &Food, requester: Requester) -> Self {
        Self::new(FoodRequestConfig {
            food_id: Some(food.id),
            requester,
            details: food.details.clone(),
            donor: food.donor.clone(),
        })
    }
}
