use axum::extract::State;
use hunger_rescue_core::domain::{
    common::value_objects::InsertOutcome, food::ports::FoodService,
};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        food::validators::CreateFoodValidator,
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
    path = "/addFood",
    tag = "food",
    summary = "Donate a food item",
    description = "Creates a food item. When a session is present its claims replace the donor fields of the body.",
    request_body = CreateFoodValidator,
    responses(
        (status = 200, body = InsertOutcome)
    ),
)]
pub async fn create_food(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<CreateFoodValidator>,
) -> Result<Response<InsertOutcome>, ApiError> {
    let outcome = state
        .service
        .create_food(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
