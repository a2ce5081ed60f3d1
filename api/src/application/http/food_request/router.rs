use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    claim_food::{__path_claim_food, claim_food},
    create_food_request::{__path_create_food_request, create_food_request},
    get_food_requests::{__path_get_food_requests, get_food_requests},
    get_food_requests_by_email::{__path_get_food_requests_by_email, get_food_requests_by_email},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    claim_food,
    create_food_request,
    get_food_requests,
    get_food_requests_by_email
))]
pub struct FoodRequestApiDoc;

pub fn food_request_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    // One segment serves both the requester email (GET) and the food id (PUT).
    Router::new()
        .route(
            &format!("{root_path}/reqFood"),
            get(get_food_requests).post(create_food_request),
        )
        .route(
            &format!("{root_path}/reqFood/{{id}}"),
            get(get_food_requests_by_email).put(claim_food),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
