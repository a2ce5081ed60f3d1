use axum::extract::{Path, State};
use hunger_rescue_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::GetFoodsByOwnerInput,
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
    path = "/myFood/{email}",
    tag = "food",
    summary = "List a donor's food",
    description = "Items donated by `email`, whatever their status. The session must belong to the same email.",
    params(
        ("email" = String, Path, description = "Donor email"),
    ),
    responses(
        (status = 200, body = Vec<Food>),
        (status = 401, description = "Missing or invalid session"),
        (status = 403, description = "Session belongs to another email")
    ),
)]
pub async fn get_my_foods(
    Path(email): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<Food>>, ApiError> {
    let foods = state
        .service
        .get_foods_by_owner(identity, GetFoodsByOwnerInput { email })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
