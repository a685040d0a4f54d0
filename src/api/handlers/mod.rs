//! HTTP request handlers, one module per resource.

pub mod auth_handler;
pub mod barber_handler;
pub mod booking_handler;
pub mod day_off_handler;

pub use auth_handler::auth_routes;
pub use barber_handler::barber_routes;
pub use booking_handler::booking_routes;
pub use day_off_handler::day_off_routes;
