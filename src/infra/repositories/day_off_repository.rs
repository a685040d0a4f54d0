//! Day-off repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::day_off::{self, ActiveModel, Entity as DayOffEntity};
use crate::domain::DayOff;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Day-off repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DayOffRepository: Send + Sync {
    /// All day-offs ordered by date, then id
    async fn list(&self) -> AppResult<Vec<DayOff>>;

    /// Rows for one barber on one date (at most one with the unique index)
    async fn find_by_barber_and_date(&self, barber_id: &str, date: NaiveDate)
        -> AppResult<Vec<DayOff>>;

    /// Insert a row. Fails with `Conflict` if (barber, date) already exists.
    async fn create(&self, barber_id: String, date: NaiveDate) -> AppResult<DayOff>;

    /// Delete by id; returns whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// SeaORM-backed day-off repository
pub struct DayOffStore {
    db: DatabaseConnection,
}

impl DayOffStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DayOffRepository for DayOffStore {
    async fn list(&self) -> AppResult<Vec<DayOff>> {
        let models = DayOffEntity::find()
            .order_by_asc(day_off::Column::Date)
            .order_by_asc(day_off::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(DayOff::from).collect())
    }

    async fn find_by_barber_and_date(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<DayOff>> {
        let models = DayOffEntity::find()
            .filter(day_off::Column::BarberId.eq(barber_id))
            .filter(day_off::Column::Date.eq(date))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(DayOff::from).collect())
    }

    async fn create(&self, barber_id: String, date: NaiveDate) -> AppResult<DayOff> {
        let active_model = ActiveModel {
            id: NotSet,
            barber_id: Set(barber_id),
            date: Set(date),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            AppError::from_insert(e, "Day off already exists for this barber and date")
        })?;
        Ok(DayOff::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = DayOffEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
