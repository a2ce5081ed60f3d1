use hunger_rescue_core::domain::food::{
    entities::{Donor, FoodDetails, FoodStatus},
    value_objects::CreateFoodInput,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodValidator {
    #[serde(default)]
    pub food_name: Option<String>,

    /// Any JSON value; stored as sent.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub quantity: Option<Value>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub donator_name: Option<String>,

    #[serde(default)]
    pub donator_photo: Option<String>,

    #[serde(default)]
    pub status: Option<FoodStatus>,
}

impl From<CreateFoodValidator> for CreateFoodInput {
    fn from(payload: CreateFoodValidator) -> Self {
        CreateFoodInput {
            details: FoodDetails {
                food_name: payload.food_name,
                quantity: payload.quantity,
                date: payload.date,
                location: payload.location,
                photo: payload.photo,
                notes: payload.notes,
            },
            donor: Donor {
                email: payload.email,
                donator_name: payload.donator_name,
                donator_photo: payload.donator_photo,
            },
            status: payload.status,
        }
    }
}

/// Only the descriptive fields are read; anything else in the body is ignored.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodValidator {
    #[serde(default)]
    pub food_name: Option<String>,

    /// Any JSON value; stored as sent.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub quantity: Option<Value>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<UpdateFoodValidator> for FoodDetails {
    fn from(payload: UpdateFoodValidator) -> Self {
        FoodDetails {
            food_name: payload.food_name,
            quantity: payload.quantity,
            date: payload.date,
            location: payload.location,
            photo: payload.photo,
            notes: payload.notes,
        }
    }
}
