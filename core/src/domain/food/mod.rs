pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Donor, Food, FoodDetails, FoodStatus};
pub use ports::{FoodRepository, FoodService};
