//! Email background job.
//!
//! Customer e-mails go through [`deliver`], either inline from the
//! notifier or from the `jobs work` worker when queueing is enabled.
//! Without SMTP_HOST the message is logged instead of sent.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use std::env;

use crate::config::{DEFAULT_SMTP_FROM, DEFAULT_SMTP_PORT};
use crate::errors::{AppError, AppResult};
use crate::utils::templates::Rendered;

/// Email job payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJob {
    pub to: String,
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// Sender override (defaults to SMTP_FROM)
    #[serde(default)]
    pub from: Option<String>,
}

impl EmailJob {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
        }
    }

    /// Build a job from a rendered template
    pub fn rendered(to: impl Into<String>, message: Rendered) -> Self {
        Self::new(to, message.subject, message.body)
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// SMTP settings from environment.
#[derive(Clone)]
pub struct EmailConfig {
    smtp_host: Option<String>,
    smtp_port: u16,
    smtp_user: Option<String>,
    smtp_pass: Option<String>,
    smtp_from: String,
    smtp_tls: bool,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &self.smtp_pass.as_ref().map(|_| "[REDACTED]"))
            .field("smtp_from", &self.smtp_from)
            .field("smtp_tls", &self.smtp_tls)
            .finish()
    }
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok().filter(|h| !h.is_empty()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_pass: env::var("SMTP_PASS").ok(),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_SMTP_FROM.to_string()),
            smtp_tls: env::var("SMTP_TLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }

    /// Log-only configuration, never opens a socket
    pub fn log_only() -> Self {
        Self {
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: None,
            smtp_pass: None,
            smtp_from: DEFAULT_SMTP_FROM.to_string(),
            smtp_tls: true,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }

    fn transport(&self, host: &str) -> AppResult<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = if self.smtp_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| AppError::internal(format!("SMTP relay setup failed: {}", e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };

        let builder = builder.port(self.smtp_port);
        let builder = match (&self.smtp_user, &self.smtp_pass) {
            (Some(user), Some(pass)) => {
                builder.credentials(Credentials::new(user.clone(), pass.clone()))
            }
            _ => builder,
        };

        Ok(builder.build())
    }
}

fn mailbox(address: &str) -> AppResult<Mailbox> {
    address
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid e-mail address {:?}: {}", address, e)))
}

/// Send one e-mail, or log it when SMTP is not configured.
pub async fn deliver(config: &EmailConfig, job: &EmailJob) -> AppResult<()> {
    let from = job.from.as_deref().unwrap_or(&config.smtp_from);

    tracing::info!(
        to = %job.to,
        from = %from,
        subject = %job.subject,
        "Processing email job"
    );

    let Some(host) = config.smtp_host.as_deref() else {
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            from,
            job.to,
            job.subject,
            job.body
        );
        return Ok(());
    };

    let email = Message::builder()
        .from(mailbox(from)?)
        .to(mailbox(&job.to)?)
        .subject(job.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(job.body.clone())
        .map_err(|e| AppError::internal(format!("Failed to build e-mail: {}", e)))?;

    config
        .transport(host)?
        .send(email)
        .await
        .map_err(|e| AppError::internal(format!("SMTP send failed: {}", e)))?;

    tracing::info!(to = %job.to, "Email sent");
    Ok(())
}

/// Worker entry point for queued e-mails
pub async fn email_job_handler(job: EmailJob) -> Result<(), AppError> {
    let config = EmailConfig::from_env();
    if !config.is_configured() {
        tracing::warn!("SMTP not configured - logging email instead of sending");
    }
    deliver(&config, &job).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_payload_shape() {
        let job = EmailJob::new("mario@example.com", "Ciao", "Body").with_from("shop@example.com");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["to"], "mario@example.com");
        assert_eq!(json["from"], "shop@example.com");

        // Older payloads without a sender still decode
        let decoded: EmailJob =
            serde_json::from_str(r#"{"to":"a@b.c","subject":"s","body":"b"}"#).unwrap();
        assert_eq!(decoded.from, None);
    }

    #[test]
    fn test_debug_hides_smtp_password() {
        let mut config = EmailConfig::log_only();
        config.smtp_pass = Some("hunter22".into());
        assert!(!format!("{:?}", config).contains("hunter22"));
    }

    #[tokio::test]
    async fn test_deliver_without_smtp_only_logs() {
        let job = EmailJob::new("mario@example.com", "Ciao", "Body");
        assert!(deliver(&EmailConfig::log_only(), &job).await.is_ok());
    }
}
