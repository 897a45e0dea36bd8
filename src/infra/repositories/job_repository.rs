//! Job repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::job::{self, ActiveModel, Entity as JobEntity};
use crate::config::JOB_STATUS_OPEN;
use crate::domain::{Job, JobUpdate, NewJob};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Job repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find job by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Job>>;

    /// Create a new job posting (server assigns id, status "Open", timestamps)
    async fn create(&self, input: NewJob) -> AppResult<Job>;

    /// Replace a job's mutable fields
    async fn update(&self, id: i32, update: JobUpdate) -> AppResult<Job>;

    /// Delete job by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all jobs
    async fn list(&self) -> AppResult<Vec<Job>>;

    /// List jobs posted by an employer
    async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>>;

    /// List jobs with an exact status value
    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Job>>;

    /// Substring search on title
    async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Job>>;

    /// Substring search on location
    async fn search_by_location(&self, fragment: &str) -> AppResult<Vec<Job>>;

    /// Substring search on required skills
    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<Job>>;

    /// Count jobs posted by an employer
    async fn count_by_employer(&self, employer_id: Uuid) -> AppResult<u64>;

    /// Count all jobs
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of JobRepository
pub struct JobStore {
    db: DatabaseConnection,
}

impl JobStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Job>> {
        let result = JobEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Job::from))
    }

    async fn create(&self, input: NewJob) -> AppResult<Job> {
        let now = Utc::now();
        let active_model = ActiveModel {
            employer_id: Set(input.employer_id),
            title: Set(input.title),
            description: Set(input.description),
            location: Set(input.location),
            salary: Set(input.salary),
            skills_required: Set(input.skills_required),
            eligibility: Set(input.eligibility),
            status: Set(JOB_STATUS_OPEN.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Job::from(model))
    }

    async fn update(&self, id: i32, update: JobUpdate) -> AppResult<Job> {
        let model = JobEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.title = Set(update.title);
        active.description = Set(update.description);
        active.location = Set(update.location);
        active.salary = Set(update.salary);
        active.skills_required = Set(update.skills_required);
        active.eligibility = Set(update.eligibility);
        active.status = Set(update.status);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Job::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = JobEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .filter(job::Column::EmployerId.eq(employer_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .filter(job::Column::Status.eq(status))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .filter(job::Column::Title.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn search_by_location(&self, fragment: &str) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .filter(job::Column::Location.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<Job>> {
        let models = JobEntity::find()
            .filter(job::Column::SkillsRequired.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn count_by_employer(&self, employer_id: Uuid) -> AppResult<u64> {
        JobEntity::find()
            .filter(job::Column::EmployerId.eq(employer_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count(&self) -> AppResult<u64> {
        JobEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
