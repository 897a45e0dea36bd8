//! Resume repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::resume::{self, ActiveModel, Entity as ResumeEntity};
use crate::domain::{NewResume, Resume, ResumeUpdate};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Resume repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Find resume by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Resume>>;

    /// Create a new resume (never default on creation)
    async fn create(&self, input: NewResume) -> AppResult<Resume>;

    /// Replace a resume's mutable fields
    async fn update(&self, id: i32, update: ResumeUpdate) -> AppResult<Resume>;

    /// Delete resume by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all resumes
    async fn list(&self) -> AppResult<Vec<Resume>>;

    /// List resumes owned by a job seeker
    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Resume>>;

    /// Count resumes owned by a job seeker
    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64>;

    /// Write the is_default flag on a single resume row
    async fn set_default_flag(&self, id: i32, is_default: bool) -> AppResult<()>;

    /// Count all resumes
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ResumeRepository
pub struct ResumeStore {
    db: DatabaseConnection,
}

impl ResumeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeRepository for ResumeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Resume>> {
        let result = ResumeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Resume::from))
    }

    async fn create(&self, input: NewResume) -> AppResult<Resume> {
        let now = Utc::now();
        let active_model = ActiveModel {
            job_seeker_id: Set(input.job_seeker_id),
            resume_name: Set(input.resume_name),
            file_path: Set(input.file_path),
            file_type: Set(input.file_type),
            parsed_skills: Set(input.parsed_skills),
            is_default: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Resume::from(model))
    }

    async fn update(&self, id: i32, update: ResumeUpdate) -> AppResult<Resume> {
        let model = ResumeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.resume_name = Set(update.resume_name);
        active.file_path = Set(update.file_path);
        active.file_type = Set(update.file_type);
        active.parsed_skills = Set(update.parsed_skills);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Resume::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ResumeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Resume>> {
        let models = ResumeEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Resume::from).collect())
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Resume>> {
        let models = ResumeEntity::find()
            .filter(resume::Column::JobSeekerId.eq(job_seeker_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Resume::from).collect())
    }

    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64> {
        ResumeEntity::find()
            .filter(resume::Column::JobSeekerId.eq(job_seeker_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn set_default_flag(&self, id: i32, is_default: bool) -> AppResult<()> {
        let model = ResumeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.is_default = Set(is_default);
        active.updated_at = Set(Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        ResumeEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
