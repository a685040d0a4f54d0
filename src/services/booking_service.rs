//! Booking service - Appointment intake and cancellation.
//!
//! Bookings are stored as submitted: no slot uniqueness, no date/time
//! format checks, price supplied by the client. The server only owns the
//! creation timestamp.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::Notifier;
use crate::config::Config;
use crate::domain::{Booking, NewBooking};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booking service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Every booking, most recently created first
    async fn list_all(&self) -> AppResult<Vec<Booking>>;

    /// Bookings whose date and barber match exactly
    async fn list_reserved(&self, date: &str, barber: &str) -> AppResult<Vec<Booking>>;

    /// Stamp, persist and confirm a booking
    async fn create(&self, input: NewBooking) -> AppResult<Booking>;

    /// Cancel a booking. Unknown ids succeed without side effects.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Admin panel credential check
    fn simple_admin_auth(&self, email: &str, password: &str) -> bool;
}

/// Concrete implementation of BookingService using Unit of Work.
pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
    notifier: Arc<dyn Notifier>,
    config: Config,
}

impl<U: UnitOfWork> BookingManager<U> {
    pub fn new(uow: Arc<U>, notifier: Arc<dyn Notifier>, config: Config) -> Self {
        Self {
            uow,
            notifier,
            config,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        self.uow.bookings().list_newest_first().await
    }

    async fn list_reserved(&self, date: &str, barber: &str) -> AppResult<Vec<Booking>> {
        self.uow.bookings().find_by_date_and_barber(date, barber).await
    }

    async fn create(&self, input: NewBooking) -> AppResult<Booking> {
        let booking = self.uow.bookings().create(input, Utc::now()).await?;

        tracing::info!(
            booking_id = booking.id,
            barber = %booking.barber,
            date = %booking.date,
            time = %booking.time,
            "Booking created"
        );

        self.notifier.booking_confirmed(&booking).await;
        Ok(booking)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let Some(booking) = self.uow.bookings().find_by_id(id).await? else {
            tracing::debug!(booking_id = id, "Delete of unknown booking ignored");
            return Ok(());
        };

        self.notifier.booking_cancelled(&booking).await;
        self.uow.bookings().delete(id).await?;

        tracing::info!(booking_id = id, "Booking cancelled");
        Ok(())
    }

    fn simple_admin_auth(&self, email: &str, password: &str) -> bool {
        let granted = email == self.config.admin_email && password == self.config.admin_password();
        if !granted {
            tracing::warn!(email = %email, "Rejected admin login");
        }
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        BarberRepository, BookingRepository, DayOffRepository, MockBookingRepository,
        UserRepository,
    };
    use crate::services::MockNotifier;

    /// Only the bookings table is reachable
    struct BookingsOnly(Arc<MockBookingRepository>);

    impl UnitOfWork for BookingsOnly {
        fn barbers(&self) -> Arc<dyn BarberRepository> {
            unreachable!("barbers not used")
        }

        fn bookings(&self) -> Arc<dyn BookingRepository> {
            self.0.clone()
        }

        fn day_offs(&self) -> Arc<dyn DayOffRepository> {
            unreachable!("day-offs not used")
        }

        fn users(&self) -> Arc<dyn UserRepository> {
            unreachable!("users not used")
        }
    }

    fn booking(id: i64) -> Booking {
        Booking {
            id,
            barber: "lele".to_string(),
            service: "Taglio".to_string(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: "mario@example.com".to_string(),
            phone: "3331234567".to_string(),
            message: None,
            price: 25.0,
            timestamp: Utc::now(),
        }
    }

    fn manager(repo: MockBookingRepository, notifier: MockNotifier) -> BookingManager<BookingsOnly> {
        BookingManager::new(
            Arc::new(BookingsOnly(Arc::new(repo))),
            Arc::new(notifier),
            Config::default(),
        )
    }

    #[tokio::test]
    async fn test_delete_unknown_booking_skips_notifier_and_delete() {
        let mut repo = MockBookingRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let mut notifier = MockNotifier::new();
        notifier.expect_booking_cancelled().never();

        manager(repo, notifier).delete(99).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_notifies_with_pre_delete_record() {
        let mut repo = MockBookingRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(booking(id))));
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_booking_cancelled()
            .withf(|b| b.id == 5 && b.email == "mario@example.com")
            .times(1)
            .return_const(());

        manager(repo, notifier).delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_passes_server_timestamp() {
        let before = Utc::now();
        let mut repo = MockBookingRepository::new();
        repo.expect_create()
            .withf(move |_, ts| *ts >= before)
            .returning(|_, ts| {
                let mut stored = booking(1);
                stored.timestamp = ts;
                Ok(stored)
            });

        let mut notifier = MockNotifier::new();
        notifier
            .expect_booking_confirmed()
            .withf(|b| b.id == 1)
            .times(1)
            .return_const(());

        let created = manager(repo, notifier)
            .create(NewBooking::default())
            .await
            .unwrap();
        assert!(created.timestamp >= before);
    }
}
