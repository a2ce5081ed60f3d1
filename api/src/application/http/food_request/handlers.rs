pub mod claim_food;
pub mod create_food_request;
pub mod get_food_requests;
pub mod get_food_requests_by_email;
