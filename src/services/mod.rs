//! Service layer - Application use cases and business logic.
//!
//! Each entity gets a service trait plus a concrete manager that talks to
//! the repository registry. Services raise typed `AppError`s; HTTP
//! translation happens once, at the error boundary.

pub mod application_service;
pub mod auth_service;
pub mod container;
pub mod employer_service;
pub mod job_seeker_service;
pub mod job_service;
pub mod notification_service;
pub mod resume_service;
pub mod user_service;

pub use application_service::{ApplicationManager, ApplicationService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use container::{ServiceContainer, Services};
pub use employer_service::{EmployerManager, EmployerService};
pub use job_seeker_service::{JobSeekerManager, JobSeekerService};
pub use job_service::{JobManager, JobService};
pub use notification_service::{NotificationManager, NotificationService};
pub use resume_service::{ResumeManager, ResumeService};
pub use user_service::{UserManager, UserService};
