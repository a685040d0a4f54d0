//! Silla Booking - Appointment booking backend for the Silla barber shop.
//!
//! Serves barbers, bookings and day-off schedules over a JSON API, plus
//! user registration/login and booking/account notifications.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Barbers, bookings, day-offs, users
//! - **services**: Booking, day-off, barber, auth and notification use cases
//! - **infra**: Database, migrations, seed data and repositories
//! - **jobs**: E-mail delivery job
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response helpers
//! - **utils**: Message templates and slug helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert the default barbers (idempotent)
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Barber, Booking, DayOff, Password, User};
pub use errors::{AppError, AppResult};
