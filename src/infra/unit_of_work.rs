//! Unit of Work - single access point to every repository.
//!
//! Services depend on this trait instead of individual stores, so a test can
//! swap in mock repositories for all tables at once.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    BarberRepository, BarberStore, BookingRepository, BookingStore, DayOffRepository,
    DayOffStore, UserRepository, UserStore,
};

/// Repository registry trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn barbers(&self) -> Arc<dyn BarberRepository>;

    fn bookings(&self) -> Arc<dyn BookingRepository>;

    fn day_offs(&self) -> Arc<dyn DayOffRepository>;

    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of UnitOfWork over one connection pool
pub struct Persistence {
    barber_repo: Arc<BarberStore>,
    booking_repo: Arc<BookingStore>,
    day_off_repo: Arc<DayOffStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create the repositories, all sharing the connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            barber_repo: Arc::new(BarberStore::new(db.clone())),
            booking_repo: Arc::new(BookingStore::new(db.clone())),
            day_off_repo: Arc::new(DayOffStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn barbers(&self) -> Arc<dyn BarberRepository> {
        self.barber_repo.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.booking_repo.clone()
    }

    fn day_offs(&self) -> Arc<dyn DayOffRepository> {
        self.day_off_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}
