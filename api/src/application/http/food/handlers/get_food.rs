use axum::extract::{Path, State};
use hunger_rescue_core::domain::food::{entities::Food, ports::FoodService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/allFood/{food_id}",
    tag = "food",
    summary = "Get a food item",
    description = "Returns the item, or `null` when it does not exist.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = Food, description = "The item, or `null`"),
        (status = 400, description = "Malformed food ID")
    ),
)]
pub async fn get_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Option<Food>>, ApiError> {
    let food = state
        .service
        .get_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(food))
}
