//! HTTP request handlers.

pub mod admin_handler;
pub mod application_handler;
pub mod auth_handler;
pub mod employer_handler;
pub mod job_handler;
pub mod job_seeker_handler;
pub mod notification_handler;
pub mod resume_handler;
pub mod user_handler;

pub use admin_handler::admin_routes;
pub use application_handler::application_routes;
pub use auth_handler::auth_routes;
pub use employer_handler::employer_routes;
pub use job_handler::job_routes;
pub use job_seeker_handler::job_seeker_routes;
pub use notification_handler::notification_routes;
pub use resume_handler::resume_routes;
pub use user_handler::user_routes;
