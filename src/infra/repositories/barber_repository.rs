//! Barber repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use super::entities::barber::{self, ActiveModel, Entity as BarberEntity};
use crate::domain::Barber;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Barber repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BarberRepository: Send + Sync {
    /// All barbers ordered by id
    async fn list(&self) -> AppResult<Vec<Barber>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Barber>>;

    /// Insert, or overwrite every field of the row with the same id
    async fn upsert(&self, barber: Barber) -> AppResult<Barber>;

    /// Insert only when no row has this id; returns whether it was inserted
    async fn insert_if_absent(&self, barber: Barber) -> AppResult<bool>;

    /// Delete by id; returns whether a row was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed barber repository
pub struct BarberStore {
    db: DatabaseConnection,
}

impl BarberStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(barber: Barber) -> ActiveModel {
    ActiveModel {
        id: Set(barber.id),
        name: Set(barber.name),
        role_key: Set(barber.role_key),
        img: Set(barber.img),
        description_it: Set(barber.description_it),
        description_en: Set(barber.description_en),
    }
}

#[async_trait]
impl BarberRepository for BarberStore {
    async fn list(&self) -> AppResult<Vec<Barber>> {
        let models = BarberEntity::find()
            .order_by_asc(barber::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Barber::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Barber>> {
        let result = BarberEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Barber::from))
    }

    async fn upsert(&self, barber: Barber) -> AppResult<Barber> {
        let existing = BarberEntity::find_by_id(barber.id.clone())
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(current) => {
                let mut active = current.into_active_model();
                active.name = Set(barber.name);
                active.role_key = Set(barber.role_key);
                active.img = Set(barber.img);
                active.description_it = Set(barber.description_it);
                active.description_en = Set(barber.description_en);
                active.update(&self.db).await?
            }
            None => active_model(barber).insert(&self.db).await?,
        };

        Ok(Barber::from(model))
    }

    async fn insert_if_absent(&self, barber: Barber) -> AppResult<bool> {
        if BarberEntity::find_by_id(barber.id.clone())
            .one(&self.db)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        active_model(barber).insert(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = BarberEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
