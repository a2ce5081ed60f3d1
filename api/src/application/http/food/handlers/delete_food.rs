use axum::extract::{Path, State};
use hunger_rescue_core::domain::{
    common::value_objects::DeleteOutcome, food::ports::FoodService,
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/allFood/{food_id}",
    tag = "food",
    summary = "Delete a food item",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = DeleteOutcome)
    ),
)]
pub async fn delete_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteOutcome>, ApiError> {
    let outcome = state
        .service
        .delete_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
