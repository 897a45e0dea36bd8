//! Job service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Job, JobUpdate, NewJob};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Job service trait for dependency injection.
#[async_trait]
pub trait JobService: Send + Sync {
    /// Get job by ID
    async fn get_job(&self, id: i32) -> AppResult<Job>;

    /// List all jobs
    async fn list_jobs(&self) -> AppResult<Vec<Job>>;

    /// Create a job posting; id, status "Open", and timestamps are
    /// server-assigned
    async fn create_job(&self, input: NewJob) -> AppResult<Job>;

    /// Replace a job's mutable fields
    async fn update_job(&self, id: i32, update: JobUpdate) -> AppResult<Job>;

    /// Delete job by ID
    async fn delete_job(&self, id: i32) -> AppResult<()>;

    /// List jobs posted by an employer
    async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>>;

    /// List jobs with an exact status value
    async fn list_by_status(&self, status: String) -> AppResult<Vec<Job>>;

    /// Substring search on title
    async fn search_by_title(&self, fragment: String) -> AppResult<Vec<Job>>;

    /// Substring search on location
    async fn search_by_location(&self, fragment: String) -> AppResult<Vec<Job>>;

    /// Substring search on required skills
    async fn search_by_skill(&self, fragment: String) -> AppResult<Vec<Job>>;

    /// Count all jobs
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of JobService.
pub struct JobManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> JobManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> JobService for JobManager<R> {
    async fn get_job(&self, id: i32) -> AppResult<Job> {
        self.repos
            .jobs()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        self.repos.jobs().list().await
    }

    async fn create_job(&self, input: NewJob) -> AppResult<Job> {
        if self
            .repos
            .employers()
            .find_by_id(input.employer_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Employer does not exist"));
        }

        self.repos.jobs().create(input).await
    }

    async fn update_job(&self, id: i32, update: JobUpdate) -> AppResult<Job> {
        self.repos.jobs().update(id, update).await
    }

    async fn delete_job(&self, id: i32) -> AppResult<()> {
        self.repos.jobs().delete(id).await
    }

    async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>> {
        self.repos.jobs().list_by_employer(employer_id).await
    }

    async fn list_by_status(&self, status: String) -> AppResult<Vec<Job>> {
        self.repos.jobs().list_by_status(&status).await
    }

    async fn search_by_title(&self, fragment: String) -> AppResult<Vec<Job>> {
        self.repos.jobs().search_by_title(&fragment).await
    }

    async fn search_by_location(&self, fragment: String) -> AppResult<Vec<Job>> {
        self.repos.jobs().search_by_location(&fragment).await
    }

    async fn search_by_skill(&self, fragment: String) -> AppResult<Vec<Job>> {
        self.repos.jobs().search_by_skill(&fragment).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.jobs().count().await
    }
}
