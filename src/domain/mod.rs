//! Domain layer - Core business entities and logic.

pub mod application;
pub mod employer;
pub mod job;
pub mod job_seeker;
pub mod notification;
pub mod password;
pub mod reset_token;
pub mod resume;
pub mod user;

pub use application::{Application, ApplicationResponse, ApplicationUpdate, NewApplication};
pub use employer::{Employer, EmployerResponse, EmployerUpdate, NewEmployer};
pub use job::{Job, JobResponse, JobUpdate, NewJob};
pub use job_seeker::{JobSeeker, JobSeekerResponse, JobSeekerUpdate, NewJobSeeker};
pub use notification::{NewNotification, Notification, NotificationResponse};
pub use password::Password;
pub use reset_token::ResetToken;
pub use resume::{NewResume, Resume, ResumeResponse, ResumeUpdate};
pub use user::{NewUser, RegisterInput, User, UserProfileUpdate, UserResponse, UserRole};
