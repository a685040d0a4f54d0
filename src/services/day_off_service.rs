//! Day-off service - Barber unavailability calendar.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::config::DATE_FORMAT;
use crate::domain::{dates_between, DayOff};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Day-off service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DayOffService: Send + Sync {
    /// All day-offs ordered by date
    async fn list_all(&self) -> AppResult<Vec<DayOff>>;

    /// Mark a single date off. A duplicate (barber, date) is a `Conflict`.
    async fn create(&self, barber_id: String, date: NaiveDate) -> AppResult<DayOff>;

    /// Delete by id; absent ids are ignored
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Mark every date in `start..=end` off, skipping dates already off.
    ///
    /// Returns only the rows created by this call, in ascending date order.
    async fn create_range(
        &self,
        barber_id: String,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DayOff>>;

    /// Day-offs of `barber_id` on `date` ("YYYY-MM-DD")
    async fn check(&self, barber_id: &str, date: &str) -> AppResult<Vec<DayOff>>;
}

/// Concrete implementation of DayOffService using Unit of Work.
pub struct DayOffManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DayOffManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Parse a wire date, mapping failures to a validation error.
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        AppError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

#[async_trait]
impl<U: UnitOfWork> DayOffService for DayOffManager<U> {
    async fn list_all(&self) -> AppResult<Vec<DayOff>> {
        self.uow.day_offs().list().await
    }

    async fn create(&self, barber_id: String, date: NaiveDate) -> AppResult<DayOff> {
        self.uow.day_offs().create(barber_id, date).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.uow.day_offs().delete(id).await? {
            tracing::debug!(day_off_id = id, "Delete of unknown day-off ignored");
        }
        Ok(())
    }

    async fn create_range(
        &self,
        barber_id: String,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DayOff>> {
        if start > end {
            return Err(AppError::validation(
                "Invalid range: startDate is after endDate",
            ));
        }

        let repo = self.uow.day_offs();
        let mut created = Vec::new();

        for date in dates_between(start, end) {
            if !repo.find_by_barber_and_date(&barber_id, date).await?.is_empty() {
                continue;
            }

            match repo.create(barber_id.clone(), date).await {
                Ok(day_off) => created.push(day_off),
                // Another request inserted the same day in between
                Err(AppError::Conflict(_)) => {
                    tracing::debug!(barber_id = %barber_id, %date, "Day-off appeared concurrently, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            barber_id = %barber_id,
            %start,
            %end,
            created = created.len(),
            "Day-off range applied"
        );

        Ok(created)
    }

    async fn check(&self, barber_id: &str, date: &str) -> AppResult<Vec<DayOff>> {
        let date = parse_date(date)?;
        self.uow.day_offs().find_by_barber_and_date(barber_id, date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        BarberRepository, BookingRepository, DayOffRepository, MockDayOffRepository,
        UserRepository,
    };

    /// Only the day-offs table is reachable
    struct DayOffsOnly(Arc<MockDayOffRepository>);

    impl UnitOfWork for DayOffsOnly {
        fn barbers(&self) -> Arc<dyn BarberRepository> {
            unreachable!("barbers not used")
        }

        fn bookings(&self) -> Arc<dyn BookingRepository> {
            unreachable!("bookings not used")
        }

        fn day_offs(&self) -> Arc<dyn DayOffRepository> {
            self.0.clone()
        }

        fn users(&self) -> Arc<dyn UserRepository> {
            unreachable!("users not used")
        }
    }

    fn manager(repo: MockDayOffRepository) -> DayOffManager<DayOffsOnly> {
        DayOffManager::new(Arc::new(DayOffsOnly(Arc::new(repo))))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[tokio::test]
    async fn test_range_skips_day_inserted_concurrently() {
        let mut repo = MockDayOffRepository::new();
        // Nothing visible up front; the insert for the 2nd still hits the index
        repo.expect_find_by_barber_and_date()
            .times(3)
            .returning(|_, _| Ok(vec![]));
        repo.expect_create().times(3).returning(|barber_id, date| {
            if date == day(2) {
                Err(AppError::conflict("Day off already exists for this barber and date"))
            } else {
                Ok(DayOff {
                    id: 1,
                    barber_id,
                    date,
                })
            }
        });

        let created = manager(repo)
            .create_range("lele".to_string(), day(1), day(3))
            .await
            .unwrap();

        let dates: Vec<_> = created.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(1), day(3)]);
    }

    #[tokio::test]
    async fn test_range_stops_on_other_errors() {
        let mut repo = MockDayOffRepository::new();
        repo.expect_find_by_barber_and_date()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        repo.expect_create()
            .times(1)
            .returning(|_, _| Err(AppError::internal("connection reset")));

        let result = manager(repo)
            .create_range("lele".to_string(), day(1), day(3))
            .await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_create_surfaces_index_conflict() {
        let mut repo = MockDayOffRepository::new();
        repo.expect_create().times(1).returning(|_, _| {
            Err(AppError::conflict("Day off already exists for this barber and date"))
        });

        let result = manager(repo).create("lele".to_string(), day(1)).await;
        match result {
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "Day off already exists for this barber and date")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(matches!(parse_date("01/06/2024"), Err(AppError::Validation(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(AppError::Validation(_))));
    }
}
