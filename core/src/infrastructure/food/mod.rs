pub mod mappers;
pub mod repositories;

pub use repositories::food_repository::PostgresFoodRepository;
