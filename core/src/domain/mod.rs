pub mod authentication;
pub mod common;
pub mod food;
pub mod food_request;
pub mod health;
