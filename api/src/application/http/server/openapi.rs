use utoipa::OpenApi;

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, food::router::FoodApiDoc,
    food_request::router::FoodRequestApiDoc, health::router::HealthApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hunger Rescue API"
    ),
    nest(
        (path = String::new(), api = AuthenticationApiDoc),
        (path = String::new(), api = FoodApiDoc),
        (path = String::new(), api = FoodRequestApiDoc),
        (path = String::new(), api = HealthApiDoc),
    ),
    tags(
        (name = "auth", description = "Cookie session"),
        (name = "food", description = "Donated food items"),
        (name = "food-request", description = "Claims and requests"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;
