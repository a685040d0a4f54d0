//! Barber service - Team roster management.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Barber, UpsertBarber};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Barber service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BarberService: Send + Sync {
    /// All barbers ordered by id
    async fn list(&self) -> AppResult<Vec<Barber>>;

    /// Create the barber, or replace every field when the id already exists
    async fn upsert(&self, input: UpsertBarber) -> AppResult<Barber>;

    /// Delete by id; absent ids are ignored
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of BarberService using Unit of Work.
pub struct BarberManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BarberManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BarberService for BarberManager<U> {
    async fn list(&self) -> AppResult<Vec<Barber>> {
        self.uow.barbers().list().await
    }

    async fn upsert(&self, input: UpsertBarber) -> AppResult<Barber> {
        if input.lacks_identity() {
            return Err(AppError::validation("Either id or name is required"));
        }

        let barber = input.into_barber();
        tracing::info!(barber_id = %barber.id, "Saving barber");
        self.uow.barbers().upsert(barber).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.uow.barbers().delete(id).await? {
            tracing::debug!(barber_id = %id, "Delete of unknown barber ignored");
        }
        Ok(())
    }
}
