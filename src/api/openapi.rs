//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, application_handler, auth_handler, employer_handler, job_handler,
    job_seeker_handler, notification_handler, resume_handler, user_handler,
};
use crate::domain::{
    ApplicationResponse, EmployerResponse, JobResponse, JobSeekerResponse, NotificationResponse,
    ResumeResponse, UserResponse, UserRole,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Job Board API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Board API",
        version = "0.1.0",
        description = "REST backend for a job-board application: users, employers, job seekers, jobs, resumes, applications, and notifications with role-based authorization",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::forgot_password,
        auth_handler::reset_password,
        // User endpoints
        user_handler::get_current_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::deactivate_user,
        user_handler::reactivate_user,
        // Employer endpoints
        employer_handler::list_employers,
        employer_handler::get_own_employer,
        employer_handler::search_employers,
        employer_handler::get_employer,
        employer_handler::create_employer,
        employer_handler::update_employer,
        employer_handler::delete_employer,
        // Job seeker endpoints
        job_seeker_handler::list_job_seekers,
        job_seeker_handler::get_own_job_seeker,
        job_seeker_handler::search_job_seekers,
        job_seeker_handler::get_job_seeker,
        job_seeker_handler::create_job_seeker,
        job_seeker_handler::update_job_seeker,
        job_seeker_handler::delete_job_seeker,
        // Job endpoints
        job_handler::list_jobs,
        job_handler::search_jobs,
        job_handler::list_jobs_by_status,
        job_handler::list_jobs_by_employer,
        job_handler::get_job,
        job_handler::create_job,
        job_handler::update_job,
        job_handler::delete_job,
        // Resume endpoints
        resume_handler::list_resumes,
        resume_handler::list_own_resumes,
        resume_handler::list_by_job_seeker,
        resume_handler::get_resume,
        resume_handler::create_resume,
        resume_handler::update_resume,
        resume_handler::delete_resume,
        resume_handler::set_default_resume,
        // Application endpoints
        application_handler::list_applications,
        application_handler::list_own_applications,
        application_handler::list_by_job,
        application_handler::list_by_status,
        application_handler::get_application,
        application_handler::create_application,
        application_handler::update_application,
        application_handler::delete_application,
        application_handler::review_application,
        application_handler::shortlist_application,
        application_handler::schedule_interview,
        // Notification endpoints
        notification_handler::list_own_notifications,
        notification_handler::list_unsent_email,
        notification_handler::get_notification,
        notification_handler::create_notification,
        notification_handler::mark_notification_read,
        notification_handler::delete_notification,
        // Admin endpoints
        admin_handler::get_stats,
        admin_handler::purge_deactivated,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            EmployerResponse,
            JobSeekerResponse,
            JobResponse,
            ResumeResponse,
            ApplicationResponse,
            NotificationResponse,
            TokenResponse,
            MessageResponse,
            // Auth requests
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::ForgotPasswordRequest,
            auth_handler::ResetPasswordRequest,
            // Entity requests
            user_handler::UpdateUserRequest,
            employer_handler::CreateEmployerRequest,
            employer_handler::UpdateEmployerRequest,
            job_seeker_handler::CreateJobSeekerRequest,
            job_seeker_handler::UpdateJobSeekerRequest,
            job_handler::CreateJobRequest,
            job_handler::UpdateJobRequest,
            resume_handler::CreateResumeRequest,
            resume_handler::UpdateResumeRequest,
            application_handler::CreateApplicationRequest,
            application_handler::UpdateApplicationRequest,
            application_handler::ReviewRequest,
            application_handler::ShortlistRequest,
            application_handler::InterviewRequest,
            notification_handler::CreateNotificationRequest,
            // Admin responses
            admin_handler::AdminStatsResponse,
            admin_handler::PurgeResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and password reset"),
        (name = "Users", description = "Account management"),
        (name = "Employers", description = "Employer profiles"),
        (name = "JobSeekers", description = "Job seeker profiles"),
        (name = "Jobs", description = "Job postings"),
        (name = "Resumes", description = "Resumes and default selection"),
        (name = "Applications", description = "Applications and review workflow"),
        (name = "Notifications", description = "In-app notifications and email status"),
        (name = "Admin", description = "Aggregate statistics and maintenance")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
