//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Each module carries the `From<Model>` mapping into its domain type.

pub mod application;
pub mod employer;
pub mod job;
pub mod job_seeker;
pub mod notification;
pub mod password_reset;
pub mod resume;
pub mod user;
