//! Booking repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::domain::{Booking, NewBooking};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booking repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings, most recently created first
    async fn list_newest_first(&self) -> AppResult<Vec<Booking>>;

    /// Bookings whose date and barber both match exactly
    async fn find_by_date_and_barber(&self, date: &str, barber: &str) -> AppResult<Vec<Booking>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>>;

    /// Persist a booking stamped with `timestamp`
    async fn create(&self, input: NewBooking, timestamp: DateTime<Utc>) -> AppResult<Booking>;

    /// Delete by id; returns whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// SeaORM-backed booking repository
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn list_newest_first(&self) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .order_by_desc(booking::Column::Timestamp)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn find_by_date_and_barber(&self, date: &str, barber: &str) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .filter(booking::Column::Date.eq(date))
            .filter(booking::Column::Barber.eq(barber))
            .order_by_asc(booking::Column::Time)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>> {
        let result = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Booking::from))
    }

    async fn create(&self, input: NewBooking, timestamp: DateTime<Utc>) -> AppResult<Booking> {
        let active_model = ActiveModel {
            id: NotSet,
            barber: Set(input.barber),
            service: Set(input.service),
            date: Set(input.date),
            time: Set(input.time),
            name: Set(input.name),
            surname: Set(input.surname),
            email: Set(input.email),
            phone: Set(input.phone),
            message: Set(input.message),
            price: Set(input.price),
            timestamp: Set(timestamp),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Booking::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = BookingEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
