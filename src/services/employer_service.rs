//! Employer service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Employer, EmployerUpdate, NewEmployer};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Employer service trait for dependency injection.
#[async_trait]
pub trait EmployerService: Send + Sync {
    /// Get employer by ID
    async fn get_employer(&self, id: Uuid) -> AppResult<Employer>;

    /// Get the employer profile belonging to a user
    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Employer>;

    /// List all employers
    async fn list_employers(&self) -> AppResult<Vec<Employer>>;

    /// Create an employer profile (one per user)
    async fn create_employer(&self, input: NewEmployer) -> AppResult<Employer>;

    /// Replace an employer's mutable fields
    async fn update_employer(&self, id: Uuid, update: EmployerUpdate) -> AppResult<Employer>;

    /// Delete an employer profile; blocked while job postings exist
    async fn delete_employer(&self, id: Uuid) -> AppResult<()>;

    /// Substring search on company name
    async fn search_by_company(&self, fragment: String) -> AppResult<Vec<Employer>>;

    /// Count all employers
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployerService.
pub struct EmployerManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> EmployerManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> EmployerService for EmployerManager<R> {
    async fn get_employer(&self, id: Uuid) -> AppResult<Employer> {
        self.repos
            .employers()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Employer> {
        self.repos
            .employers()
            .find_by_user(user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_employers(&self) -> AppResult<Vec<Employer>> {
        self.repos.employers().list().await
    }

    async fn create_employer(&self, input: NewEmployer) -> AppResult<Employer> {
        // The target user must exist
        if self.repos.users().find_by_id(input.user_id).await?.is_none() {
            return Err(AppError::validation("User does not exist"));
        }

        // One employer profile per user (application-level guard)
        if self
            .repos
            .employers()
            .find_by_user(input.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Employer profile"));
        }

        self.repos.employers().create(input).await
    }

    async fn update_employer(&self, id: Uuid, update: EmployerUpdate) -> AppResult<Employer> {
        self.repos.employers().update(id, update).await
    }

    async fn delete_employer(&self, id: Uuid) -> AppResult<()> {
        let _ = self.get_employer(id).await?;

        if self.repos.jobs().count_by_employer(id).await? > 0 {
            return Err(AppError::dependency_conflict(
                "Employer has job postings and cannot be deleted",
            ));
        }

        self.repos.employers().delete(id).await
    }

    async fn search_by_company(&self, fragment: String) -> AppResult<Vec<Employer>> {
        self.repos.employers().search_by_company(&fragment).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repos.employers().count().await
    }
}
