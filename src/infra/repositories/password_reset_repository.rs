//! Password-reset token repository.
//!
//! Stores only token digests; raw tokens never touch the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::password_reset::{self, ActiveModel, Entity as ResetEntity, Model};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A stored reset record as seen by the auth service.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for ResetRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash,
            expires_at: model.expires_at,
            used: model.used,
            created_at: model.created_at,
        }
    }
}

/// Password-reset repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    /// Store a new reset record
    async fn create(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> AppResult<ResetRecord>;

    /// Find an unused, unexpired record matching the digest
    async fn find_valid(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<ResetRecord>>;

    /// Mark a record consumed
    async fn mark_used(&self, id: Uuid) -> AppResult<()>;

    /// Invalidate all outstanding records for a user
    async fn invalidate_for_user(&self, user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of PasswordResetRepository
pub struct PasswordResetStore {
    db: DatabaseConnection,
}

impl PasswordResetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PasswordResetRepository for PasswordResetStore {
    async fn create(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> AppResult<ResetRecord> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            expires_at: Set(expires_at),
            used: Set(false),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(ResetRecord::from(model))
    }

    async fn find_valid(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<ResetRecord>> {
        let result = ResetEntity::find()
            .filter(password_reset::Column::TokenHash.eq(token_hash))
            .filter(password_reset::Column::Used.eq(false))
            .filter(password_reset::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ResetRecord::from))
    }

    async fn mark_used(&self, id: Uuid) -> AppResult<()> {
        let model = ResetEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.used = Set(true);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn invalidate_for_user(&self, user_id: Uuid) -> AppResult<()> {
        use sea_orm::sea_query::Expr;

        ResetEntity::update_many()
            .col_expr(password_reset::Column::Used, Expr::value(true))
            .filter(password_reset::Column::UserId.eq(user_id))
            .filter(password_reset::Column::Used.eq(false))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
