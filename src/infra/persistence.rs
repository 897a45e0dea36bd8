//! Repository registry.
//!
//! Centralizes access to all repositories behind one trait so services
//! depend on a single injectable seam. Every write here is a single-row
//! statement; the application never opens explicit multi-statement
//! transactions, leaving row locking to the database.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    ApplicationRepository, ApplicationStore, EmployerRepository, EmployerStore, JobRepository,
    JobSeekerRepository, JobSeekerStore, JobStore, NotificationRepository, NotificationStore,
    PasswordResetRepository, PasswordResetStore, ResumeRepository, ResumeStore, UserRepository,
    UserStore,
};

/// Repository registry trait for dependency injection.
pub trait Repositories: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get employer repository
    fn employers(&self) -> Arc<dyn EmployerRepository>;

    /// Get job seeker repository
    fn job_seekers(&self) -> Arc<dyn JobSeekerRepository>;

    /// Get job repository
    fn jobs(&self) -> Arc<dyn JobRepository>;

    /// Get resume repository
    fn resumes(&self) -> Arc<dyn ResumeRepository>;

    /// Get application repository
    fn applications(&self) -> Arc<dyn ApplicationRepository>;

    /// Get notification repository
    fn notifications(&self) -> Arc<dyn NotificationRepository>;

    /// Get password-reset repository
    fn password_resets(&self) -> Arc<dyn PasswordResetRepository>;
}

/// Concrete registry backed by the shared database connection
pub struct Persistence {
    user_repo: Arc<UserStore>,
    employer_repo: Arc<EmployerStore>,
    job_seeker_repo: Arc<JobSeekerStore>,
    job_repo: Arc<JobStore>,
    resume_repo: Arc<ResumeStore>,
    application_repo: Arc<ApplicationStore>,
    notification_repo: Arc<NotificationStore>,
    password_reset_repo: Arc<PasswordResetStore>,
}

impl Persistence {
    /// Create new registry instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            employer_repo: Arc::new(EmployerStore::new(db.clone())),
            job_seeker_repo: Arc::new(JobSeekerStore::new(db.clone())),
            job_repo: Arc::new(JobStore::new(db.clone())),
            resume_repo: Arc::new(ResumeStore::new(db.clone())),
            application_repo: Arc::new(ApplicationStore::new(db.clone())),
            notification_repo: Arc::new(NotificationStore::new(db.clone())),
            password_reset_repo: Arc::new(PasswordResetStore::new(db)),
        }
    }
}

impl Repositories for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn employers(&self) -> Arc<dyn EmployerRepository> {
        self.employer_repo.clone()
    }

    fn job_seekers(&self) -> Arc<dyn JobSeekerRepository> {
        self.job_seeker_repo.clone()
    }

    fn jobs(&self) -> Arc<dyn JobRepository> {
        self.job_repo.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeRepository> {
        self.resume_repo.clone()
    }

    fn applications(&self) -> Arc<dyn ApplicationRepository> {
        self.application_repo.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repo.clone()
    }

    fn password_resets(&self) -> Arc<dyn PasswordResetRepository> {
        self.password_reset_repo.clone()
    }
}
