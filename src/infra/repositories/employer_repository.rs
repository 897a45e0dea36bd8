//! Employer repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::employer::{self, ActiveModel, Entity as EmployerEntity};
use crate::domain::{Employer, EmployerUpdate, NewEmployer};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployerRepository: Send + Sync {
    /// Find employer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employer>>;

    /// Find the employer profile belonging to a user
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Employer>>;

    /// Create a new employer profile
    async fn create(&self, input: NewEmployer) -> AppResult<Employer>;

    /// Replace an employer's mutable fields
    async fn update(&self, id: Uuid, update: EmployerUpdate) -> AppResult<Employer>;

    /// Delete employer by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List all employers
    async fn list(&self) -> AppResult<Vec<Employer>>;

    /// Substring search on company name
    async fn search_by_company(&self, fragment: &str) -> AppResult<Vec<Employer>>;

    /// Count all employers
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployerRepository
pub struct EmployerStore {
    db: DatabaseConnection,
}

impl EmployerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployerRepository for EmployerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employer>> {
        let result = EmployerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employer::from))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Employer>> {
        let result = EmployerEntity::find()
            .filter(employer::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employer::from))
    }

    async fn create(&self, input: NewEmployer) -> AppResult<Employer> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            company_name: Set(input.company_name),
            contact_info: Set(input.contact_info),
            position: Set(input.position),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employer::from(model))
    }

    async fn update(&self, id: Uuid, update: EmployerUpdate) -> AppResult<Employer> {
        let model = EmployerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.company_name = Set(update.company_name);
        active.contact_info = Set(update.contact_info);
        active.position = Set(update.position);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employer::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EmployerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employer>> {
        let models = EmployerEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employer::from).collect())
    }

    async fn search_by_company(&self, fragment: &str) -> AppResult<Vec<Employer>> {
        let models = EmployerEntity::find()
            .filter(employer::Column::CompanyName.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employer::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        EmployerEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
