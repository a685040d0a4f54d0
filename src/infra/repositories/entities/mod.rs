//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod barber;
pub mod booking;
pub mod day_off;
pub mod user;
