//! User service - Account lifecycle beyond authentication.
//!
//! Deactivation is distinct from deletion: a deactivated account keeps
//! its rows but cannot log in, and may later be purged by the admin
//! sweep once past the retention cutoff.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{User, UserProfileUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users (including deactivated)
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace a user's mutable profile fields
    async fn update_user(&self, id: Uuid, update: UserProfileUpdate) -> AppResult<User>;

    /// Permanently delete a user; blocked while dependent rows exist
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Deactivate an account (is_active = false, deactivated_at stamped)
    async fn deactivate_user(&self, id: Uuid) -> AppResult<User>;

    /// Reactivate a deactivated account
    async fn reactivate_user(&self, id: Uuid) -> AppResult<User>;

    /// Hard-delete accounts deactivated more than `days` days ago.
    /// Driven by an external scheduler, never in-process.
    async fn purge_deactivated(&self, days: i64) -> AppResult<u64>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService.
pub struct UserManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> UserManager<R> {
    /// Create new user service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }

    /// Application-level referential integrity: a user whose profile
    /// still owns jobs, resumes, or applications cannot be deleted.
    async fn guard_dependents(&self, id: Uuid) -> AppResult<()> {
        if let Some(employer) = self.repos.employers().find_by_user(id).await? {
            if self.repos.jobs().count_by_employer(employer.id).await? > 0 {
                return Err(AppError::dependency_conflict(
                    "User has job postings and cannot be deleted",
                ));
            }
        }

        if let Some(job_seeker) = self.repos.job_seekers().find_by_user(id).await? {
            let resumes = self
                .repos
                .resumes()
                .count_by_job_seeker(job_seeker.id)
                .await?;
            let applications = self
                .repos
                .applications()
                .count_by_job_seeker(job_seeker.id)
                .await?;
            if resumes > 0 || applications > 0 {
                return Err(AppError::dependency_conflict(
                    "User has resumes or applications and cannot be deleted",
                ));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repositories> UserService for UserManager<R> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repos.users().list().await
    }

    async fn update_user(&self, id: Uuid, update: UserProfileUpdate) -> AppResult<User> {
        self.repos.users().update_profile(id, update).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        // Surface NotFound before the dependency guard
        let _ = self.get_user(id).await?;
        self.guard_dependents(id).await?;
        self.repos.users().delete(id).await
    }

    async fn deactivate_user(&self, id: Uuid) -> AppResult<User> {
        let user = self.get_user(id).await?;
        if !user.is_active {
            return Err(AppError::BadRequest(
                "User is already deactivated".to_string(),
            ));
        }
        self.repos.users().deactivate(id).await
    }

    async fn reactivate_user(&self, id: Uuid) -> AppResult<User> {
        let user = self.get_user(id).await?;
        if user.is_active {
            return Err(AppError::BadRequest("User is not deactivated".to_string()));
        }
        self.repos.users().reactivate(id).await
    }

    async fn purge_deactivated(&self, days: i64) -> AppResult<u64> {
        if days < 0 {
            return Err(AppError::validation("days must not be negative"));
        }
        let cutoff = Utc::now() - Duration::days(days);
        let purged = self.repos.users().purge_deactivated(cutoff).await?;
        if purged > 0 {
            tracing::info!(purged, "Purged deactivated users");
        }
        Ok(purged)
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.users().count().await
    }
}
