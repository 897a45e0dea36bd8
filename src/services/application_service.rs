//! Application service.
//!
//! Review, shortlist, and interview operations are targeted field
//! updates, not a guarded state machine; each fans out an in-app
//! notification to the applicant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Application, ApplicationUpdate, NewApplication, NewNotification};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;
use crate::services::NotificationService;

/// Application service trait for dependency injection.
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Get application by ID
    async fn get_application(&self, id: i32) -> AppResult<Application>;

    /// List all applications
    async fn list_applications(&self) -> AppResult<Vec<Application>>;

    /// Submit an application; id, status "Applied", and applied_at are
    /// server-assigned
    async fn create_application(&self, input: NewApplication) -> AppResult<Application>;

    /// Replace an application's mutable fields
    async fn update_application(&self, id: i32, update: ApplicationUpdate)
        -> AppResult<Application>;

    /// Delete application by ID
    async fn delete_application(&self, id: i32) -> AppResult<()>;

    /// List applications for a job
    async fn list_by_job(&self, job_id: i32) -> AppResult<Vec<Application>>;

    /// List applications submitted by a job seeker
    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Application>>;

    /// List applications with an exact status value
    async fn list_by_status(&self, status: String) -> AppResult<Vec<Application>>;

    /// Stamp reviewed_at, optionally overwriting notes
    async fn mark_reviewed(&self, id: i32, notes: Option<String>) -> AppResult<Application>;

    /// Set the shortlist flag
    async fn set_shortlisted(&self, id: i32, shortlisted: bool) -> AppResult<Application>;

    /// Set the interview date
    async fn schedule_interview(&self, id: i32, date: DateTime<Utc>) -> AppResult<Application>;

    /// Count all applications
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ApplicationService.
pub struct ApplicationManager<R: Repositories> {
    repos: Arc<R>,
    notifications: Arc<dyn NotificationService>,
}

impl<R: Repositories> ApplicationManager<R> {
    pub fn new(repos: Arc<R>, notifications: Arc<dyn NotificationService>) -> Self {
        Self {
            repos,
            notifications,
        }
    }

    /// Best-effort notification fan-out to the applicant's user account.
    async fn notify_applicant(&self, application: &Application, subject: &str, message: String) {
        let user_id = match self
            .repos
            .job_seekers()
            .find_by_id(application.job_seeker_id)
            .await
        {
            Ok(Some(job_seeker)) => job_seeker.user_id,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Notification fan-out lookup failed: {}", e);
                return;
            }
        };

        let result = self
            .notifications
            .create_notification(NewNotification {
                user_id,
                subject: subject.to_string(),
                message,
                send_email: true,
            })
            .await;

        if let Err(e) = result {
            tracing::warn!(
                application_id = application.id,
                "Notification fan-out failed: {}",
                e
            );
        }
    }
}

#[async_trait]
impl<R: Repositories> ApplicationService for ApplicationManager<R> {
    async fn get_application(&self, id: i32) -> AppResult<Application> {
        self.repos
            .applications()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_applications(&self) -> AppResult<Vec<Application>> {
        self.repos.applications().list().await
    }

    async fn create_application(&self, input: NewApplication) -> AppResult<Application> {
        if self.repos.jobs().find_by_id(input.job_id).await?.is_none() {
            return Err(AppError::validation("Job does not exist"));
        }

        if self
            .repos
            .job_seekers()
            .find_by_id(input.job_seeker_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Job seeker does not exist"));
        }

        let resume = self
            .repos
            .resumes()
            .find_by_id(input.resume_id)
            .await?
            .ok_or_else(|| AppError::validation("Resume does not exist"))?;

        if resume.job_seeker_id != input.job_seeker_id {
            return Err(AppError::validation(
                "Resume does not belong to the applicant",
            ));
        }

        self.repos.applications().create(input).await
    }

    async fn update_application(
        &self,
        id: i32,
        update: ApplicationUpdate,
    ) -> AppResult<Application> {
        self.repos.applications().update(id, update).await
    }

    async fn delete_application(&self, id: i32) -> AppResult<()> {
        self.repos.applications().delete(id).await
    }

    async fn list_by_job(&self, job_id: i32) -> AppResult<Vec<Application>> {
        self.repos.applications().list_by_job(job_id).await
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Application>> {
        self.repos
            .applications()
            .list_by_job_seeker(job_seeker_id)
            .await
    }

    async fn list_by_status(&self, status: String) -> AppResult<Vec<Application>> {
        self.repos.applications().list_by_status(&status).await
    }

    async fn mark_reviewed(&self, id: i32, notes: Option<String>) -> AppResult<Application> {
        let application = self.repos.applications().mark_reviewed(id, notes).await?;

        self.notify_applicant(
            &application,
            "Application reviewed",
            format!("Your application #{} has been reviewed.", application.id),
        )
        .await;

        Ok(application)
    }

    async fn set_shortlisted(&self, id: i32, shortlisted: bool) -> AppResult<Application> {
        let application = self
            .repos
            .applications()
            .set_shortlisted(id, shortlisted)
            .await?;

        if shortlisted {
            self.notify_applicant(
                &application,
                "Application shortlisted",
                format!("Your application #{} has been shortlisted.", application.id),
            )
            .await;
        }

        Ok(application)
    }

    async fn schedule_interview(&self, id: i32, date: DateTime<Utc>) -> AppResult<Application> {
        let application = self
            .repos
            .applications()
            .set_interview_date(id, date)
            .await?;

        self.notify_applicant(
            &application,
            "Interview scheduled",
            format!(
                "An interview for your application #{} is scheduled for {}.",
                application.id,
                date.format("%Y-%m-%d %H:%M UTC")
            ),
        )
        .await;

        Ok(application)
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.applications().count().await
    }
}
