//! Domain layer - Core business entities
//!
//! Barbers, their bookings and days off, and customer accounts.
//! Independent of storage and HTTP concerns.

pub mod barber;
pub mod booking;
pub mod day_off;
pub mod password;
pub mod user;

pub use barber::{Barber, UpsertBarber};
pub use booking::{Booking, NewBooking, ReservedQuery};
pub use day_off::{dates_between, DayOff, DayOffCheckQuery, DayOffRange, NewDayOff};
pub use password::Password;
pub use user::{User, UserResponse};
