use axum::extract::{Query, State};
use hunger_rescue_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::FoodSortOrder,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetFoodsQuery {
    /// Sort on the `date` field, `asc` or `desc` (default).
    #[serde(default, deserialize_with = "deserialize_sort")]
    pub date: Option<FoodSortOrder>,
}

/// `?date=` with no value falls back to the default order.
fn deserialize_sort<'de, D>(deserializer: D) -> Result<Option<FoodSortOrder>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("asc") => Ok(Some(FoodSortOrder::Asc)),
        Some("desc") => Ok(Some(FoodSortOrder::Desc)),
        Some(other) => Err(de::Error::unknown_variant(other, &["asc", "desc"])),
    }
}

#[utoipa::path(
    get,
    path = "/allFood",
    tag = "food",
    summary = "List available food",
    description = "Returns every item still available, ordered by date.",
    params(GetFoodsQuery),
    responses(
        (status = 200, body = Vec<Food>)
    ),
)]
pub async fn get_foods(
    State(state): State<AppState>,
    Query(query): Query<GetFoodsQuery>,
) -> Result<Response<Vec<Food>>, ApiError> {
    let foods = state
        .service
        .get_available_foods(query.date.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
