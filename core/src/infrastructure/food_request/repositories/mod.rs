pub mod food_request_repository;
