//! Application repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::application::{self, ActiveModel, Entity as ApplicationEntity};
use crate::config::APPLICATION_STATUS_APPLIED;
use crate::domain::{Application, ApplicationUpdate, NewApplication};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Application repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find application by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Application>>;

    /// Create a new application (server assigns id, status "Applied", applied_at)
    async fn create(&self, input: NewApplication) -> AppResult<Application>;

    /// Replace an application's mutable fields
    async fn update(&self, id: i32, update: ApplicationUpdate) -> AppResult<Application>;

    /// Delete application by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all applications
    async fn list(&self) -> AppResult<Vec<Application>>;

    /// List applications for a job
    async fn list_by_job(&self, job_id: i32) -> AppResult<Vec<Application>>;

    /// List applications submitted by a job seeker
    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Application>>;

    /// List applications with an exact status value
    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Application>>;

    /// Count applications submitted by a job seeker
    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64>;

    /// Count applications referencing a resume
    async fn count_by_resume(&self, resume_id: i32) -> AppResult<u64>;

    /// Stamp reviewed_at = now, optionally overwriting notes
    async fn mark_reviewed(&self, id: i32, notes: Option<String>) -> AppResult<Application>;

    /// Set the shortlist flag
    async fn set_shortlisted(&self, id: i32, shortlisted: bool) -> AppResult<Application>;

    /// Set the interview date
    async fn set_interview_date(&self, id: i32, date: DateTime<Utc>) -> AppResult<Application>;

    /// Count all applications
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ApplicationRepository
pub struct ApplicationStore {
    db: DatabaseConnection,
}

impl ApplicationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: i32) -> AppResult<application::Model> {
        ApplicationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl ApplicationRepository for ApplicationStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Application>> {
        let result = ApplicationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Application::from))
    }

    async fn create(&self, input: NewApplication) -> AppResult<Application> {
        let active_model = ActiveModel {
            job_id: Set(input.job_id),
            job_seeker_id: Set(input.job_seeker_id),
            resume_id: Set(input.resume_id),
            cover_letter: Set(input.cover_letter),
            status: Set(APPLICATION_STATUS_APPLIED.to_string()),
            applied_at: Set(Utc::now()),
            reviewed_at: Set(None),
            notes: Set(None),
            is_shortlisted: Set(false),
            interview_date: Set(None),
            employer_feedback: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Application::from(model))
    }

    async fn update(&self, id: i32, update: ApplicationUpdate) -> AppResult<Application> {
        let model = self.load(id).await?;

        let mut active: ActiveModel = model.into();
        active.cover_letter = Set(update.cover_letter);
        active.status = Set(update.status);
        active.notes = Set(update.notes);
        active.employer_feedback = Set(update.employer_feedback);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Application::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ApplicationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Application>> {
        let models = ApplicationEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Application::from).collect())
    }

    async fn list_by_job(&self, job_id: i32) -> AppResult<Vec<Application>> {
        let models = ApplicationEntity::find()
            .filter(application::Column::JobId.eq(job_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Application::from).collect())
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Application>> {
        let models = ApplicationEntity::find()
            .filter(application::Column::JobSeekerId.eq(job_seeker_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Application::from).collect())
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Application>> {
        let models = ApplicationEntity::find()
            .filter(application::Column::Status.eq(status))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Application::from).collect())
    }

    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64> {
        ApplicationEntity::find()
            .filter(application::Column::JobSeekerId.eq(job_seeker_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count_by_resume(&self, resume_id: i32) -> AppResult<u64> {
        ApplicationEntity::find()
            .filter(application::Column::ResumeId.eq(resume_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn mark_reviewed(&self, id: i32, notes: Option<String>) -> AppResult<Application> {
        let model = self.load(id).await?;

        let mut active: ActiveModel = model.into();
        active.reviewed_at = Set(Some(Utc::now()));
        if let Some(notes) = notes {
            active.notes = Set(Some(notes));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Application::from(model))
    }

    async fn set_shortlisted(&self, id: i32, shortlisted: bool) -> AppResult<Application> {
        let model = self.load(id).await?;

        let mut active: ActiveModel = model.into();
        active.is_shortlisted = Set(shortlisted);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Application::from(model))
    }

    async fn set_interview_date(&self, id: i32, date: DateTime<Utc>) -> AppResult<Application> {
        let model = self.load(id).await?;

        let mut active: ActiveModel = model.into();
        active.interview_date = Set(Some(date));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Application::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        ApplicationEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
