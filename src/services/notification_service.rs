//! Notification service.
//!
//! Create persists the row first, then attempts email delivery inline.
//! A failed send is logged and leaves `sent_email = false` for the
//! external retry sweep; the create call itself still succeeds.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewNotification, Notification};
use crate::errors::{AppError, AppResult};
use crate::infra::{Mailer, Repositories};

/// Notification service trait for dependency injection.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Get notification by ID
    async fn get_notification(&self, id: i32) -> AppResult<Notification>;

    /// Persist a notification, optionally attempting email delivery
    async fn create_notification(&self, input: NewNotification) -> AppResult<Notification>;

    /// Delete notification by ID
    async fn delete_notification(&self, id: i32) -> AppResult<()>;

    /// List notifications for a user
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Mark a notification read
    async fn mark_read(&self, id: i32) -> AppResult<Notification>;

    /// Notifications whose email was never delivered, for an external
    /// scheduled job to retry
    async fn list_unsent_email(&self) -> AppResult<Vec<Notification>>;

    /// Count all notifications
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of NotificationService.
pub struct NotificationManager<R: Repositories> {
    repos: Arc<R>,
    mailer: Arc<Mailer>,
}

impl<R: Repositories> NotificationManager<R> {
    pub fn new(repos: Arc<R>, mailer: Arc<Mailer>) -> Self {
        Self { repos, mailer }
    }
}

#[async_trait]
impl<R: Repositories> NotificationService for NotificationManager<R> {
    async fn get_notification(&self, id: i32) -> AppResult<Notification> {
        self.repos
            .notifications()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_notification(&self, input: NewNotification) -> AppResult<Notification> {
        let user = self
            .repos
            .users()
            .find_by_id(input.user_id)
            .await?
            .ok_or_else(|| AppError::validation("User does not exist"))?;

        let mut notification = self
            .repos
            .notifications()
            .create(input.user_id, input.subject.clone(), input.message.clone())
            .await?;

        if input.send_email {
            match self
                .mailer
                .send(&user.email, &input.subject, &input.message)
                .await
            {
                Ok(()) => {
                    self.repos
                        .notifications()
                        .mark_email_sent(notification.id)
                        .await?;
                    notification.sent_email = true;
                }
                Err(e) => {
                    // Fire and forget: the row stays unsent for the sweep
                    tracing::warn!(
                        notification_id = notification.id,
                        "Failed to send notification email: {}",
                        e
                    );
                }
            }
        }

        Ok(notification)
    }

    async fn delete_notification(&self, id: i32) -> AppResult<()> {
        self.repos.notifications().delete(id).await
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        self.repos.notifications().list_by_user(user_id).await
    }

    async fn mark_read(&self, id: i32) -> AppResult<Notification> {
        self.repos.notifications().mark_read(id).await
    }

    async fn list_unsent_email(&self) -> AppResult<Vec<Notification>> {
        self.repos.notifications().list_unsent_email().await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.notifications().count().await
    }
}
