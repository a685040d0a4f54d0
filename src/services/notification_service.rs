//! Customer notifications - simulated SMS plus e-mail.
//!
//! Notifications are best effort: every failure is logged and swallowed,
//! so a broken mail relay never fails a booking or an account change.

use apalis::prelude::Storage;
use apalis_sql::postgres::PostgresStorage;
use async_trait::async_trait;

use crate::config::SMS_COUNTRY_PREFIX;
use crate::domain::Booking;
use crate::jobs::{deliver, EmailConfig, EmailJob};
use crate::utils::templates;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification sink used by the booking and auth services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Booking stored; the record carries its assigned id
    async fn booking_confirmed(&self, booking: &Booking);

    /// Booking about to be removed
    async fn booking_cancelled(&self, booking: &Booking);

    async fn welcome(&self, email: &str, name: &str);

    async fn goodbye(&self, email: &str, name: &str);
}

/// Where rendered e-mails go.
#[derive(Clone)]
pub enum Outbox {
    /// Send (or log) inline, inside the request
    Direct(EmailConfig),
    /// Persist to the apalis queue for `jobs work`
    Queue(PostgresStorage<EmailJob>),
}

/// Default notifier: logs SMS, dispatches e-mail through an [`Outbox`].
pub struct Notifications {
    outbox: Outbox,
}

impl Notifications {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }

    fn send_sms(&self, phone: &str, text: &str) {
        tracing::info!(
            to = %format!("{} {}", SMS_COUNTRY_PREFIX, phone),
            "=== SMS (simulated) === {}",
            text
        );
    }

    async fn send_email(&self, job: EmailJob) {
        let to = job.to.clone();
        match &self.outbox {
            Outbox::Direct(config) => {
                if let Err(e) = deliver(config, &job).await {
                    tracing::error!(to = %to, error = ?e, "Failed to send e-mail");
                }
            }
            Outbox::Queue(storage) => {
                let mut storage = storage.clone();
                match storage.push(job).await {
                    Ok(_) => tracing::debug!(to = %to, "E-mail queued"),
                    Err(e) => tracing::error!(to = %to, error = %e, "Failed to queue e-mail"),
                }
            }
        }
    }
}

#[async_trait]
impl Notifier for Notifications {
    async fn booking_confirmed(&self, booking: &Booking) {
        self.send_sms(&booking.phone, &templates::booking_confirmation_sms(booking));
        self.send_email(EmailJob::rendered(
            booking.email.as_str(),
            templates::booking_confirmation_email(booking),
        ))
        .await;
    }

    async fn booking_cancelled(&self, booking: &Booking) {
        self.send_sms(&booking.phone, &templates::booking_cancellation_sms(booking));
        self.send_email(EmailJob::rendered(
            booking.email.as_str(),
            templates::booking_cancellation_email(booking),
        ))
        .await;
    }

    async fn welcome(&self, email: &str, name: &str) {
        self.send_email(EmailJob::rendered(email, templates::welcome_email(name)))
            .await;
    }

    async fn goodbye(&self, email: &str, name: &str) {
        self.send_email(EmailJob::rendered(email, templates::goodbye_email(name)))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking(email: &str) -> Booking {
        Booking {
            id: 7,
            barber: "lele".to_string(),
            service: "Taglio".to_string(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: email.to_string(),
            phone: "3331234567".to_string(),
            message: None,
            price: 25.0,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_direct_outbox_logs_without_smtp() {
        let notifier = Notifications::new(Outbox::Direct(EmailConfig::log_only()));
        notifier.booking_confirmed(&booking("mario@example.com")).await;
        notifier.welcome("anna@example.com", "Anna").await;
    }
}
