use axum::extract::State;
use hunger_rescue_core::domain::food_request::{
    entities::FoodRequest, ports::FoodRequestService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/reqFood",
    tag = "food-request",
    summary = "List food requests",
    responses(
        (status = 200, body = Vec<FoodRequest>)
    ),
)]
pub async fn get_food_requests(
    State(state): State<AppState>,
) -> Result<Response<Vec<FoodRequest>>, ApiError> {
    let requests = state
        .service
        .get_food_requests()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(requests))
}
