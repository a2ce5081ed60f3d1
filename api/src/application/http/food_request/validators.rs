use hunger_rescue_core::domain::{
    food::entities::{Donor, FoodDetails},
    food_request::{entities::Requester, value_objects::CreateFoodRequestInput},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Requester data sent when claiming an item. Food fields in the body are
/// ignored; the stored request copies the item itself.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFoodValidator {
    #[serde(default)]
    pub user_email: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub request_date: Option<String>,

    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl From<ClaimFoodValidator> for Requester {
    fn from(payload: ClaimFoodValidator) -> Self {
        Requester {
            user_email: payload.user_email,
            user_name: payload.user_name,
            request_date: payload.request_date,
            additional_notes: payload.additional_notes,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequestValidator {
    #[serde(default)]
    pub food_id: Option<Uuid>,

    #[serde(default)]
    pub user_email: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub request_date: Option<String>,

    #[serde(default)]
    pub additional_notes: Option<String>,

    #[serde(default)]
    pub food_name: Option<String>,

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
}

impl From<CreateFoodRequestValidator> for CreateFoodRequestInput {
    fn from(payload: CreateFoodRequestValidator) -> Self {
        CreateFoodRequestInput {
            food_id: payload.food_id,
            requester: Requester {
                user_email: payload.user_email,
                user_name: payload.user_name,
                request_date: payload.request_date,
                additional_notes: payload.additional_notes,
            },
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
        }
    }
}
