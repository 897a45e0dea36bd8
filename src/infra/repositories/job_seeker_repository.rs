//! Job seeker repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::job_seeker::{self, ActiveModel, Entity as JobSeekerEntity};
use crate::domain::{JobSeeker, JobSeekerUpdate, NewJobSeeker};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Job seeker repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JobSeekerRepository: Send + Sync {
    /// Find job seeker by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobSeeker>>;

    /// Find the job seeker profile belonging to a user
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<JobSeeker>>;

    /// Create a new job seeker profile
    async fn create(&self, input: NewJobSeeker) -> AppResult<JobSeeker>;

    /// Replace a job seeker's mutable fields
    async fn update(&self, id: Uuid, update: JobSeekerUpdate) -> AppResult<JobSeeker>;

    /// Delete job seeker by ID (the dependent-rows guard lives in the service)
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List all job seekers
    async fn list(&self) -> AppResult<Vec<JobSeeker>>;

    /// Substring search on college
    async fn search_by_college(&self, fragment: &str) -> AppResult<Vec<JobSeeker>>;

    /// Substring search on skills
    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<JobSeeker>>;

    /// Count all job seekers
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of JobSeekerRepository
pub struct JobSeekerStore {
    db: DatabaseConnection,
}

impl JobSeekerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobSeekerRepository for JobSeekerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobSeeker>> {
        let result = JobSeekerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(JobSeeker::from))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<JobSeeker>> {
        let result = JobSeekerEntity::find()
            .filter(job_seeker::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(JobSeeker::from))
    }

    async fn create(&self, input: NewJobSeeker) -> AppResult<JobSeeker> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            education_details: Set(input.education_details),
            skills: Set(input.skills),
            college: Set(input.college),
            work_status: Set(input.work_status),
            experience_years: Set(input.experience_years),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(JobSeeker::from(model))
    }

    async fn update(&self, id: Uuid, update: JobSeekerUpdate) -> AppResult<JobSeeker> {
        let model = JobSeekerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.education_details = Set(update.education_details);
        active.skills = Set(update.skills);
        active.college = Set(update.college);
        active.work_status = Set(update.work_status);
        active.experience_years = Set(update.experience_years);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(JobSeeker::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = JobSeekerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<JobSeeker>> {
        let models = JobSeekerEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(JobSeeker::from).collect())
    }

    async fn search_by_college(&self, fragment: &str) -> AppResult<Vec<JobSeeker>> {
        let models = JobSeekerEntity::find()
            .filter(job_seeker::Column::College.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(JobSeeker::from).collect())
    }

    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<JobSeeker>> {
        let models = JobSeekerEntity::find()
            .filter(job_seeker::Column::Skills.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(JobSeeker::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        JobSeekerEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
