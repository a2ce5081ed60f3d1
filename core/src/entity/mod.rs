pub mod food_requests;
pub mod foods;
