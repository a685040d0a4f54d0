//! Service Container - wires every service over one Unit of Work.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, BarberManager, BarberService, BookingManager, BookingService,
    DayOffManager, DayOffService, Notifications, Notifier, Outbox,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn barbers(&self) -> Arc<dyn BarberService>;

    fn bookings(&self) -> Arc<dyn BookingService>;

    fn day_offs(&self) -> Arc<dyn DayOffService>;

    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    barber_service: Arc<dyn BarberService>,
    booking_service: Arc<dyn BookingService>,
    day_off_service: Arc<dyn DayOffService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Build every service from a connection pool; the notifier sends
    /// e-mail through `outbox`.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config, outbox: Outbox) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let notifier: Arc<dyn Notifier> = Arc::new(Notifications::new(outbox));

        Self {
            barber_service: Arc::new(BarberManager::new(uow.clone())),
            booking_service: Arc::new(BookingManager::new(uow.clone(), notifier.clone(), config)),
            day_off_service: Arc::new(DayOffManager::new(uow.clone())),
            auth_service: Arc::new(Authenticator::new(uow, notifier)),
        }
    }
}

impl ServiceContainer for Services {
    fn barbers(&self) -> Arc<dyn BarberService> {
        self.barber_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }

    fn day_offs(&self) -> Arc<dyn DayOffService> {
        self.day_off_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
