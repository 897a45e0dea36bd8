//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and repositories
//! - Email delivery (best-effort SMTP)

pub mod db;
pub mod email;
pub mod persistence;
pub mod repositories;

pub use db::{Database, Migrator};
pub use email::Mailer;
pub use persistence::{Persistence, Repositories};
