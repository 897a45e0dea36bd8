//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Mailer};
use crate::services::{
    ApplicationService, AuthService, EmployerService, JobSeekerService, JobService,
    NotificationService, ResumeService, ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Employer service
    pub employer_service: Arc<dyn EmployerService>,
    /// Job seeker service
    pub job_seeker_service: Arc<dyn JobSeekerService>,
    /// Job service
    pub job_service: Arc<dyn JobService>,
    /// Resume service
    pub resume_service: Arc<dyn ResumeService>,
    /// Application service
    pub application_service: Arc<dyn ApplicationService>,
    /// Notification service
    pub notification_service: Arc<dyn NotificationService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, mailer: Arc<Mailer>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), mailer, config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            employer_service: container.employers(),
            job_seeker_service: container.job_seekers(),
            job_service: container.jobs(),
            resume_service: container.resumes(),
            application_service: container.applications(),
            notification_service: container.notifications(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    /// Used by tests that stub individual services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        employer_service: Arc<dyn EmployerService>,
        job_seeker_service: Arc<dyn JobSeekerService>,
        job_service: Arc<dyn JobService>,
        resume_service: Arc<dyn ResumeService>,
        application_service: Arc<dyn ApplicationService>,
        notification_service: Arc<dyn NotificationService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            employer_service,
            job_seeker_service,
            job_service,
            resume_service,
            application_service,
            notification_service,
            database,
        }
    }
}
