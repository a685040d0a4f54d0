//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and seed data
//! - Repositories (one per table)
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    BarberRepository, BarberStore, BookingRepository, BookingStore, DayOffRepository,
    DayOffStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockBarberRepository, MockBookingRepository, MockDayOffRepository, MockUserRepository,
};
