pub mod food_repository;
