use axum::extract::{Path, State};
use hunger_rescue_core::domain::food_request::{
    entities::FoodRequest, ports::FoodRequestService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/reqFood/{email}",
    tag = "food-request",
    summary = "List a requester's food requests",
    description = "The session must belong to `email`.",
    params(
        ("email" = String, Path, description = "Requester email"),
    ),
    responses(
        (status = 200, body = Vec<FoodRequest>),
        (status = 401, description = "Missing or invalid session"),
        (status = 403, description = "Session belongs to another email")
    ),
)]
pub async fn get_food_requests_by_email(
    Path(email): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<FoodRequest>>, ApiError> {
    let requests = state
        .service
        .get_food_requests_by_requester(identity, email)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(requests))
}
