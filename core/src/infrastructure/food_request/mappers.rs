use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::{
    food::entities::{Donor, FoodDetails},
    food_request::entities::{FoodRequest, Requester},
};
use crate::entity::food_requests::{
    ActiveModel as FoodRequestActiveModel, Model as FoodRequestModel,
};

impl From<FoodRequestModel> for FoodRequest {
    fn from(model: FoodRequestModel) -> Self {
        FoodRequest {
            id: model.id,
            food_id: model.food_id,
            requester: Requester {
                user_email: model.user_email,
                user_name: model.user_name,
                request_date: model.request_date,
                additional_notes: model.additional_notes,
            },
            details: FoodDetails {
                food_name: model.food_name,
                quantity: model.quantity,
                date: model.date,
                location: model.location,
                photo: model.photo,
                notes: model.notes,
            },
            donor: Donor {
                email: model.email,
                donator_name: model.donator_name,
                donator_photo: model.donator_photo,
            },
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<FoodRequest> for FoodRequestActiveModel {
    fn from(request: FoodRequest) -> Self {
        FoodRequestActiveModel {
            id: Set(request.id),
            food_id: Set(request.food_id),
            user_email: Set(request.requester.user_email),
            user_name: Set(request.requester.user_name),
            request_date: Set(request.requester.request_date),
            additional_notes: Set(request.requester.additional_notes),
            food_name: Set(request.details.food_name),
            quantity: Set(request.details.quantity),
            date: Set(request.details.date),
            location: Set(request.details.location),
            photo: Set(request.details.photo),
            notes: Set(request.details.notes),
            email: Set(request.donor.email),
            donator_name: Set(request.donor.donator_name),
            donator_photo: Set(request.donor.donator_photo),
            created_at: Set(request.created_at.fixed_offset()),
        }
    }
}
