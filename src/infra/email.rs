//! Best-effort synchronous email delivery.
//!
//! When SMTP settings are present the mailer sends through an async SMTP
//! transport; otherwise it logs the message and reports success so
//! development flows keep working. There is no queue and no retry here:
//! callers attempt delivery inline and decide for themselves whether a
//! failure matters.

use std::env;

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::errors::{AppError, AppResult};

/// Email configuration from environment.
struct EmailConfig {
    smtp_host: Option<String>,
    smtp_user: String,
    smtp_pass: String,
    smtp_from: String,
}

impl EmailConfig {
    fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_user: env::var("SMTP_USER").unwrap_or_default(),
            smtp_pass: env::var("SMTP_PASS").unwrap_or_default(),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@example.com".to_string()),
        }
    }
}

/// Mailer handle shared across services.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl Mailer {
    /// Build the mailer from SMTP_* environment variables.
    pub fn from_env() -> Self {
        let config = EmailConfig::from_env();

        let transport = match &config.smtp_host {
            Some(host) => match AsyncSmtpTransport::<Tokio1Executor>::relay(host) {
                Ok(builder) => {
                    let creds =
                        Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
                    Some(builder.credentials(creds).build())
                }
                Err(e) => {
                    tracing::error!("Invalid SMTP relay {}: {}", host, e);
                    None
                }
            },
            None => {
                tracing::warn!("SMTP not configured - emails will be logged instead of sent");
                None
            }
        };

        Self {
            transport,
            from: config.smtp_from,
        }
    }

    /// A mailer that only logs, for tests.
    #[doc(hidden)]
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: "noreply@example.com".to_string(),
        }
    }

    /// Send a plain-text email.
    ///
    /// Without a configured transport the message is logged and treated
    /// as delivered, matching development-mode behavior.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let Some(transport) = &self.transport else {
            tracing::info!(
                "=== EMAIL (not sent) ===\n\
                 From: {}\n\
                 To: {}\n\
                 Subject: {}\n\
                 Body:\n{}\n\
                 ========================",
                self.from,
                to,
                subject,
                body
            );
            return Ok(());
        };

        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::internal(format!("Invalid sender address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::internal(format!("Invalid recipient address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build email: {}", e)))?;

        transport
            .send(email)
            .await
            .map_err(|e| AppError::internal(format!("Failed to send email: {}", e)))?;

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}
