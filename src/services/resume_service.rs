//! Resume service.
//!
//! Holds the default-selection rewrite: every resume of the job seeker is
//! updated so exactly one carries `is_default = true`.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewResume, Resume, ResumeUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Resume service trait for dependency injection.
#[async_trait]
pub trait ResumeService: Send + Sync {
    /// Get resume by ID
    async fn get_resume(&self, id: i32) -> AppResult<Resume>;

    /// List all resumes
    async fn list_resumes(&self) -> AppResult<Vec<Resume>>;

    /// List resumes owned by a job seeker
    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Resume>>;

    /// Create a resume
    async fn create_resume(&self, input: NewResume) -> AppResult<Resume>;

    /// Replace a resume's mutable fields
    async fn update_resume(&self, id: i32, update: ResumeUpdate) -> AppResult<Resume>;

    /// Delete a resume; blocked while applications reference it
    async fn delete_resume(&self, id: i32) -> AppResult<()>;

    /// Make `resume_id` the single default among the job seeker's resumes
    async fn set_default(&self, job_seeker_id: Uuid, resume_id: i32) -> AppResult<Resume>;

    /// Count all resumes
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ResumeService.
pub struct ResumeManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> ResumeManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> ResumeService for ResumeManager<R> {
    async fn get_resume(&self, id: i32) -> AppResult<Resume> {
        self.repos
            .resumes()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_resumes(&self) -> AppResult<Vec<Resume>> {
        self.repos.resumes().list().await
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Resume>> {
        self.repos.resumes().list_by_job_seeker(job_seeker_id).await
    }

    async fn create_resume(&self, input: NewResume) -> AppResult<Resume> {
        if self
            .repos
            .job_seekers()
            .find_by_id(input.job_seeker_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Job seeker does not exist"));
        }

        self.repos.resumes().create(input).await
    }

    async fn update_resume(&self, id: i32, update: ResumeUpdate) -> AppResult<Resume> {
        self.repos.resumes().update(id, update).await
    }

    async fn delete_resume(&self, id: i32) -> AppResult<()> {
        let _ = self.get_resume(id).await?;

        if self.repos.applications().count_by_resume(id).await? > 0 {
            return Err(AppError::dependency_conflict(
                "Resume is referenced by applications and cannot be deleted",
            ));
        }

        self.repos.resumes().delete(id).await
    }

    async fn set_default(&self, job_seeker_id: Uuid, resume_id: i32) -> AppResult<Resume> {
        let resumes = self
            .repos
            .resumes()
            .list_by_job_seeker(job_seeker_id)
            .await?;

        if !resumes.iter().any(|r| r.id == resume_id) {
            return Err(AppError::NotFound);
        }

        // Row-by-row rewrite without a transaction: two concurrent calls
        // for the same job seeker can interleave and leave zero or two
        // defaults. Sequential calls always leave exactly one.
        for resume in &resumes {
            self.repos
                .resumes()
                .set_default_flag(resume.id, resume.id == resume_id)
                .await?;
        }

        self.get_resume(resume_id).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.resumes().count().await
    }
}
