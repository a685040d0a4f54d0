//! Authentication service - Customer accounts.
//!
//! Passwords are hashed with the domain `Password` value object. Login
//! only answers "which user, if any"; no token or session is issued.

use async_trait::async_trait;
use std::sync::Arc;

use super::Notifier;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and send the welcome e-mail
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// The matching user, or `None` for an unknown email or wrong password
    async fn login(&self, email: String, password: String) -> AppResult<Option<User>>;

    /// Send the goodbye e-mail, then remove the account
    async fn delete_account(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    notifier: Arc<dyn Notifier>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, notifier: Arc<dyn Notifier>) -> Self {
        Self { uow, notifier }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Email format is validated by the handler's ValidatedJson extractor
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password_hash = Password::new(&password)?.into_string();
        // A concurrent registration surfaces here as Conflict from the unique index
        let user = self
            .uow
            .users()
            .create(name, email, password_hash)
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        self.notifier.welcome(&user.email, &user.name).await;
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<Option<User>> {
        let user = self.uow.users().find_by_email(&email).await?;

        // Unknown emails still pay for one Argon2 verification
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(user_id = user.id, "User logged in");
                Ok(Some(user))
            }
            _ => {
                tracing::debug!("Login rejected");
                Ok(None)
            }
        }
    }

    async fn delete_account(&self, id: i64) -> AppResult<()> {
        let user = self.uow.users().find_by_id(id).await?.ok_or_not_found()?;

        self.notifier.goodbye(&user.email, &user.name).await;
        self.uow.users().delete(id).await?;

        tracing::info!(user_id = id, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        BarberRepository, BookingRepository, DayOffRepository, MockUserRepository,
        UserRepository,
    };
    use crate::services::MockNotifier;

    struct UsersOnly(Arc<MockUserRepository>);

    impl UnitOfWork for UsersOnly {
        fn barbers(&self) -> Arc<dyn BarberRepository> {
            unreachable!("barbers not used")
        }

        fn bookings(&self) -> Arc<dyn BookingRepository> {
            unreachable!("bookings not used")
        }

        fn day_offs(&self) -> Arc<dyn DayOffRepository> {
            unreachable!("day-offs not used")
        }

        fn users(&self) -> Arc<dyn UserRepository> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_register_losing_insert_race_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_, _, _| Err(AppError::conflict("Email already in use")));

        let mut notifier = MockNotifier::new();
        notifier.expect_welcome().never();

        let auth = Authenticator::new(Arc::new(UsersOnly(Arc::new(repo))), Arc::new(notifier));
        let result = auth
            .register(
                "Anna".to_string(),
                "anna@example.com".to_string(),
                "password123".to_string(),
            )
            .await;

        match result {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "Email already in use"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }
}
