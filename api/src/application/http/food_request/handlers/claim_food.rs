use axum::extract::{Path, State};
use hunger_rescue_core::domain::{
    common::value_objects::InsertOutcome,
    food::{ports::FoodService, value_objects::ClaimFoodInput},
};
use uuid::Uuid;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        food_request::validators::ClaimFoodValidator,
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
    put,
    path = "/reqFood/{food_id}",
    tag = "food-request",
    summary = "Claim a food item",
    description = "Marks an available item as requested and records a snapshot of it with the requester data. Fails with 404 when the item is missing or already requested.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = ClaimFoodValidator,
    responses(
        (status = 200, body = InsertOutcome),
        (status = 404, description = "Request failed")
    ),
)]
pub async fn claim_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<ClaimFoodValidator>,
) -> Result<Response<InsertOutcome>, ApiError> {
    let outcome = state
        .service
        .claim_food(
            identity,
            ClaimFoodInput {
                food_id,
                requester: payload.into(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
