use axum::extract::State;
use hunger_rescue_core::domain::health::{
    entities::DatabaseHealthStatus, ports::HealthCheckService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database not ready")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    if !status.is_up() {
        return Err(ApiError::ServiceUnavailable(status.message));
    }

    Ok(Response::OK(status))
}
