//! User service tests: lifecycle, deactivation, purge, delete guards.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{seed_employer, seed_job_seeker, seed_user, MemoryRepos};
use jobboard_api::domain::{NewJob, NewResume, UserProfileUpdate, UserRole};
use jobboard_api::errors::AppError;
use jobboard_api::infra::Repositories;
use jobboard_api::services::{UserManager, UserService};

fn service(repos: Arc<MemoryRepos>) -> UserManager<MemoryRepos> {
    UserManager::new(repos)
}

#[tokio::test]
async fn test_get_user_not_found() {
    let repos = Arc::new(MemoryRepos::default());
    let users = service(repos);

    let result = users.get_user(Uuid::new_v4()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_update_user_full_replace() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let users = service(repos);

    let updated = users
        .update_user(
            user.id,
            UserProfileUpdate {
                name: "New Name".to_string(),
                date_of_birth: None,
                gender: Some("other".to_string()),
                address: None,
                role: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.gender.as_deref(), Some("other"));
    // Full-replace semantics: omitted optional fields are cleared
    assert!(updated.address.is_none());
    // Role untouched without an explicit change
    assert_eq!(updated.role, UserRole::JobSeeker);
}

#[tokio::test]
async fn test_deactivate_stamps_timestamp() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::Employer).await;
    let users = service(repos);

    let deactivated = users.deactivate_user(user.id).await.unwrap();
    assert!(!deactivated.is_active);
    assert!(deactivated.deactivated_at.is_some());

    // Deactivating twice is an error
    let result = users.deactivate_user(user.id).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_reactivate_clears_deactivation() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::Employer).await;
    let users = service(repos);

    users.deactivate_user(user.id).await.unwrap();
    let reactivated = users.reactivate_user(user.id).await.unwrap();

    assert!(reactivated.is_active);
    assert!(reactivated.deactivated_at.is_none());

    // Reactivating an active account is an error
    let result = users.reactivate_user(user.id).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_purge_removes_only_old_deactivated_accounts() {
    let repos = Arc::new(MemoryRepos::default());
    let active = seed_user(&repos, "active@example.com", UserRole::JobSeeker).await;
    let stale = seed_user(&repos, "stale@example.com", UserRole::JobSeeker).await;
    let users = service(repos.clone());

    users.deactivate_user(stale.id).await.unwrap();

    // Zero-day retention: anything deactivated before "now" is eligible
    let purged = users.purge_deactivated(0).await.unwrap();
    assert_eq!(purged, 1);

    assert!(users.get_user(active.id).await.is_ok());
    assert!(matches!(
        users.get_user(stale.id).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_purge_rejects_negative_days() {
    let repos = Arc::new(MemoryRepos::default());
    let users = service(repos);

    let result = users.purge_deactivated(-1).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_delete_user_without_dependents() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let users = service(repos);

    users.delete_user(user.id).await.unwrap();

    // Delete then get yields NotFound
    assert!(matches!(
        users.get_user(user.id).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_delete_user_blocked_by_employer_jobs() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employer = seed_employer(&repos, user.id, "Acme").await;
    repos
        .jobs()
        .create(NewJob {
            employer_id: employer.id,
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            location: "Remote".to_string(),
            salary: None,
            skills_required: None,
            eligibility: None,
        })
        .await
        .unwrap();
    let users = service(repos);

    let result = users.delete_user(user.id).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::DependencyConflict(_)
    ));
}

#[tokio::test]
async fn test_delete_user_blocked_by_job_seeker_resumes() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "seeker@example.com", UserRole::JobSeeker).await;
    let job_seeker = seed_job_seeker(&repos, user.id).await;
    repos
        .resumes()
        .create(NewResume {
            job_seeker_id: job_seeker.id,
            resume_name: "cv.pdf".to_string(),
            file_path: "/files/cv.pdf".to_string(),
            file_type: None,
            parsed_skills: None,
        })
        .await
        .unwrap();
    let users = service(repos);

    let result = users.delete_user(user.id).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::DependencyConflict(_)
    ));
}
