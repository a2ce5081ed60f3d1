use axum::extract::State;
use hunger_rescue_core::domain::{
    common::value_objects::InsertOutcome, food_request::ports::FoodRequestService,
};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        food_request::validators::CreateFoodRequestValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/reqFood",
    tag = "food-request",
    summary = "Record a food request",
    description = "Stores the request as submitted, without touching any food item.",
    request_body = CreateFoodRequestValidator,
    responses(
        (status = 200, body = InsertOutcome)
    ),
)]
pub async fn create_food_request(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<CreateFoodRequestValidator>,
) -> Result<Response<InsertOutcome>, ApiError> {
    let outcome = state
        .service
        .create_food_request(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
