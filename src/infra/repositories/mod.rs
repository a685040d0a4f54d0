//! Repository layer - Data access abstraction
//!
//! One repository per table, each a trait (mockable in tests) plus a
//! SeaORM-backed store.

mod barber_repository;
mod booking_repository;
mod day_off_repository;
pub(crate) mod entities;
mod user_repository;

pub use barber_repository::{BarberRepository, BarberStore};
pub use booking_repository::{BookingRepository, BookingStore};
pub use day_off_repository::{DayOffRepository, DayOffStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use barber_repository::MockBarberRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use day_off_repository::MockDayOffRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
