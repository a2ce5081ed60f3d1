use axum::extract::{Path, State};
use hunger_rescue_core::domain::{
    common::value_objects::UpdateOutcome,
    food::{ports::FoodService, value_objects::UpdateFoodInput},
};
use uuid::Uuid;

use crate::application::http::{
    food::validators::UpdateFoodValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/allFood/{food_id}",
    tag = "food",
    summary = "Update a food item",
    description = "Overwrites the descriptive fields. Status and donor fields are never changed. Unknown ids are upserted.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = UpdateFoodValidator,
    responses(
        (status = 200, body = UpdateOutcome)
    ),
)]
pub async fn update_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodValidator>,
) -> Result<Response<UpdateOutcome>, ApiError> {
    let outcome = state
        .service
        .update_food(UpdateFoodInput {
            food_id,
            details: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
