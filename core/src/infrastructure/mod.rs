pub mod db;
pub mod food;
pub mod food_request;
pub mod health;
pub mod jwt;
