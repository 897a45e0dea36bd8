//! Notification repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use crate::domain::Notification;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find notification by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Notification>>;

    /// Persist a new notification; `sent_email` starts false until a
    /// delivery attempt succeeds
    async fn create(&self, user_id: Uuid, subject: String, message: String)
        -> AppResult<Notification>;

    /// Delete notification by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List notifications for a user
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// List notifications whose email was never sent (external retry sweep)
    async fn list_unsent_email(&self) -> AppResult<Vec<Notification>>;

    /// Mark a notification read
    async fn mark_read(&self, id: i32) -> AppResult<Notification>;

    /// Record a successful email delivery
    async fn mark_email_sent(&self, id: i32) -> AppResult<()>;

    /// Count all notifications
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of NotificationRepository
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Notification>> {
        let result = NotificationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Notification::from))
    }

    async fn create(
        &self,
        user_id: Uuid,
        subject: String,
        message: String,
    ) -> AppResult<Notification> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            subject: Set(subject),
            message: Set(message),
            is_read: Set(false),
            sent_email: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Notification::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = NotificationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        let models = NotificationEntity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Notification::from).collect())
    }

    async fn list_unsent_email(&self) -> AppResult<Vec<Notification>> {
        let models = NotificationEntity::find()
            .filter(notification::Column::SentEmail.eq(false))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Notification::from).collect())
    }

    async fn mark_read(&self, id: i32) -> AppResult<Notification> {
        let model = NotificationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.is_read = Set(true);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Notification::from(model))
    }

    async fn mark_email_sent(&self, id: i32) -> AppResult<()> {
        let model = NotificationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.sent_email = Set(true);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        NotificationEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
