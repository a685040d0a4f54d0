//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, BarberService, BookingService, DayOffService, Outbox, ServiceContainer, Services,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub barber_service: Arc<dyn BarberService>,
    pub booking_service: Arc<dyn BookingService>,
    pub day_off_service: Arc<dyn DayOffService>,
    pub auth_service: Arc<dyn AuthService>,
    /// Used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the real services over the database pool.
    pub fn from_config(database: Arc<Database>, config: Config, outbox: Outbox) -> Self {
        let container = Services::from_connection(database.get_connection(), config, outbox);

        Self {
            barber_service: container.barbers(),
            booking_service: container.bookings(),
            day_off_service: container.day_offs(),
            auth_service: container.auth(),
            database,
        }
    }

    /// Create state with manually injected services (tests).
    pub fn new(
        barber_service: Arc<dyn BarberService>,
        booking_service: Arc<dyn BookingService>,
        day_off_service: Arc<dyn DayOffService>,
        auth_service: Arc<dyn AuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            barber_service,
            booking_service,
            day_off_service,
            auth_service,
            database,
        }
    }
}
