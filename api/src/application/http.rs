pub mod authentication;
pub mod food;
pub mod food_request;
pub mod health;
pub mod server;
