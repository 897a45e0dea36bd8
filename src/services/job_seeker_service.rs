//! Job seeker service.
//!
//! Deletion is guarded: a job seeker with resumes or applications is a
//! dependency conflict, not a cascade.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{JobSeeker, JobSeekerUpdate, NewJobSeeker};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Job seeker service trait for dependency injection.
#[async_trait]
pub trait JobSeekerService: Send + Sync {
    /// Get job seeker by ID
    async fn get_job_seeker(&self, id: Uuid) -> AppResult<JobSeeker>;

    /// Get the job seeker profile belonging to a user
    async fn get_by_user(&self, user_id: Uuid) -> AppResult<JobSeeker>;

    /// List all job seekers
    async fn list_job_seekers(&self) -> AppResult<Vec<JobSeeker>>;

    /// Create a job seeker profile (one per user)
    async fn create_job_seeker(&self, input: NewJobSeeker) -> AppResult<JobSeeker>;

    /// Replace a job seeker's mutable fields
    async fn update_job_seeker(&self, id: Uuid, update: JobSeekerUpdate) -> AppResult<JobSeeker>;

    /// Delete a job seeker; fails while resumes or applications exist
    async fn delete_job_seeker(&self, id: Uuid) -> AppResult<()>;

    /// Substring search on college
    async fn search_by_college(&self, fragment: String) -> AppResult<Vec<JobSeeker>>;

    /// Substring search on skills
    async fn search_by_skill(&self, fragment: String) -> AppResult<Vec<JobSeeker>>;

    /// Count all job seekers
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of JobSeekerService.
pub struct JobSeekerManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> JobSeekerManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> JobSeekerService for JobSeekerManager<R> {
    async fn get_job_seeker(&self, id: Uuid) -> AppResult<JobSeeker> {
        self.repos
            .job_seekers()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<JobSeeker> {
        self.repos
            .job_seekers()
            .find_by_user(user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_job_seekers(&self) -> AppResult<Vec<JobSeeker>> {
        self.repos.job_seekers().list().await
    }

    async fn create_job_seeker(&self, input: NewJobSeeker) -> AppResult<JobSeeker> {
        if self.repos.users().find_by_id(input.user_id).await?.is_none() {
            return Err(AppError::validation("User does not exist"));
        }

        // One job seeker profile per user (application-level guard)
        if self
            .repos
            .job_seekers()
            .find_by_user(input.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Job seeker profile"));
        }

        self.repos.job_seekers().create(input).await
    }

    async fn update_job_seeker(&self, id: Uuid, update: JobSeekerUpdate) -> AppResult<JobSeeker> {
        self.repos.job_seekers().update(id, update).await
    }

    async fn delete_job_seeker(&self, id: Uuid) -> AppResult<()> {
        let _ = self.get_job_seeker(id).await?;

        let resumes = self.repos.resumes().count_by_job_seeker(id).await?;
        let applications = self.repos.applications().count_by_job_seeker(id).await?;
        if resumes > 0 || applications > 0 {
            return Err(AppError::dependency_conflict(
                "Job seeker has resumes or applications and cannot be deleted",
            ));
        }

        self.repos.job_seekers().delete(id).await
    }

    async fn search_by_college(&self, fragment: String) -> AppResult<Vec<JobSeeker>> {
        self.repos.job_seekers().search_by_college(&fragment).await
    }

    async fn search_by_skill(&self, fragment: String) -> AppResult<Vec<JobSeeker>> {
        self.repos.job_seekers().search_by_skill(&fragment).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.job_seekers().count().await
    }
}
