//! Service Container - Centralized service access.
//!
//! Wires every service against the shared repository registry so the
//! HTTP layer depends on traits, not concrete managers.

use std::sync::Arc;

use super::{
    ApplicationManager, ApplicationService, AuthService, Authenticator, EmployerManager,
    EmployerService, JobManager, JobSeekerManager, JobSeekerService, JobService,
    NotificationManager, NotificationService, ResumeManager, ResumeService, UserManager,
    UserService,
};
use crate::config::Config;
use crate::infra::{Mailer, Persistence};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get employer service
    fn employers(&self) -> Arc<dyn EmployerService>;

    /// Get job seeker service
    fn job_seekers(&self) -> Arc<dyn JobSeekerService>;

    /// Get job service
    fn jobs(&self) -> Arc<dyn JobService>;

    /// Get resume service
    fn resumes(&self) -> Arc<dyn ResumeService>;

    /// Get application service
    fn applications(&self) -> Arc<dyn ApplicationService>;

    /// Get notification service
    fn notifications(&self) -> Arc<dyn NotificationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    employer_service: Arc<dyn EmployerService>,
    job_seeker_service: Arc<dyn JobSeekerService>,
    job_service: Arc<dyn JobService>,
    resume_service: Arc<dyn ResumeService>,
    application_service: Arc<dyn ApplicationService>,
    notification_service: Arc<dyn NotificationService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        mailer: Arc<Mailer>,
        config: Config,
    ) -> Self {
        let repos = Arc::new(Persistence::new(db));

        let auth_service = Arc::new(Authenticator::new(repos.clone(), config, mailer.clone()));
        let user_service = Arc::new(UserManager::new(repos.clone()));
        let employer_service = Arc::new(EmployerManager::new(repos.clone()));
        let job_seeker_service = Arc::new(JobSeekerManager::new(repos.clone()));
        let job_service = Arc::new(JobManager::new(repos.clone()));
        let resume_service = Arc::new(ResumeManager::new(repos.clone()));
        let notification_service: Arc<dyn NotificationService> =
            Arc::new(NotificationManager::new(repos.clone(), mailer));
        let application_service = Arc::new(ApplicationManager::new(
            repos,
            notification_service.clone(),
        ));

        Self {
            auth_service,
            user_service,
            employer_service,
            job_seeker_service,
            job_service,
            resume_service,
            application_service,
            notification_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn employers(&self) -> Arc<dyn EmployerService> {
        self.employer_service.clone()
    }

    fn job_seekers(&self) -> Arc<dyn JobSeekerService> {
        self.job_seeker_service.clone()
    }

    fn jobs(&self) -> Arc<dyn JobService> {
        self.job_service.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeService> {
        self.resume_service.clone()
    }

    fn applications(&self) -> Arc<dyn ApplicationService> {
        self.application_service.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationService> {
        self.notification_service.clone()
    }
}
