pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{FoodRequest, Requester};
pub use ports::{FoodRequestRepository, FoodRequestService};
