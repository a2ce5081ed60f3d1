pub mod cookies;
pub mod handlers;
pub mod router;
pub mod validators;
