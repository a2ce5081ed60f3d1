use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::food::entities::{Donor, Food, FoodDetails, FoodStatus};
use crate::entity::foods::{ActiveModel as FoodActiveModel, Model as FoodModel};

impl From<FoodModel> for Food {
    fn from(model: FoodModel) -> Self {
        Food {
            id: model.id,
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
            status: model.status.as_deref().map(FoodStatus::from),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Food> for FoodActiveModel {
    fn from(food: Food) -> Self {
        FoodActiveModel {
            id: Set(food.id),
            food_name: Set(food.details.food_name),
            quantity: Set(food.details.quantity),
            date: Set(food.details.date),
            location: Set(food.details.location),
            photo: Set(food.details.photo),
            notes: Set(food.details.notes),
            email: Set(food.donor.email),
            donator_name: Set(food.donor.donator_name),
            donator_photo: Set(food.donor.donator_photo),
            status: Set(food.status.map(|status| status.as_str().to_string())),
            created_at: Set(food.created_at.fixed_offset()),
            updated_at: Set(food.updated_at.fixed_offset()),
        }
    }
}
