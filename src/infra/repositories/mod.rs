//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Every repository exposes an explicit `count()` so admin statistics
//! never rely on runtime type inspection.

mod application_repository;
mod employer_repository;
pub(crate) mod entities;
mod job_repository;
mod job_seeker_repository;
mod notification_repository;
mod password_reset_repository;
mod resume_repository;
mod user_repository;

pub use application_repository::{ApplicationRepository, ApplicationStore};
pub use employer_repository::{EmployerRepository, EmployerStore};
pub use job_repository::{JobRepository, JobStore};
pub use job_seeker_repository::{JobSeekerRepository, JobSeekerStore};
pub use notification_repository::{NotificationRepository, NotificationStore};
pub use password_reset_repository::{PasswordResetRepository, PasswordResetStore, ResetRecord};
pub use resume_repository::{ResumeRepository, ResumeStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use application_repository::MockApplicationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employer_repository::MockEmployerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use job_repository::MockJobRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use job_seeker_repository::MockJobSeekerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository::MockNotificationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use password_reset_repository::MockPasswordResetRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use resume_repository::MockResumeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
