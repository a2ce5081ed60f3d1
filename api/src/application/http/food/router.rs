use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_food::{__path_create_food, create_food},
    delete_food::{__path_delete_food, delete_food},
    get_food::{__path_get_food, get_food},
    get_foods::{__path_get_foods, get_foods},
    get_my_foods::{__path_get_my_foods, get_my_foods},
    update_food::{__path_update_food, update_food},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_food, get_foods, get_food, update_food, delete_food, get_my_foods))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/addFood"), post(create_food))
        .route(&format!("{root_path}/allFood"), get(get_foods))
        .route(
            &format!("{root_path}/allFood/{{food_id}}"),
            get(get_food).put(update_food).delete(delete_food),
        )
        .route(&format!("{root_path}/myFood/{{email}}"), get(get_my_foods))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
