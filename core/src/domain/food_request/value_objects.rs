use uuid::Uuid;

use crate::domain::{
    food::entities::{Donor, FoodDetails},
    food_request::entities::Requester,
};

#[derive(Debug, Clone, Default)]
pub struct CreateFoodRequestInput {
    pub food_id: Option<Uuid>,
    pub requester: Requester,
    pub details: FoodDetails,
    pub donor: Donor,
}

#[derive(Debug, Clone, Default)]
pub struct GetFoodRequestsFilter {
    pub user_email: Option<String>,
}
