//! Employer service tests: profile uniqueness, search, delete guard.

mod common;

use std::sync::Arc;

use common::{seed_employer, seed_user, MemoryRepos};
use jobboard_api::domain::{EmployerUpdate, NewEmployer, NewJob, UserRole};
use jobboard_api::errors::AppError;
use jobboard_api::infra::Repositories;
use jobboard_api::services::{EmployerManager, EmployerService};

fn service(repos: Arc<MemoryRepos>) -> EmployerManager<MemoryRepos> {
    EmployerManager::new(repos)
}

#[tokio::test]
async fn test_one_profile_per_user() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employers = service(repos);

    let input = NewEmployer {
        user_id: user.id,
        company_name: "Acme".to_string(),
        contact_info: None,
        position: None,
    };

    employers.create_employer(input.clone()).await.unwrap();

    let result = employers.create_employer(input).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_requires_existing_user() {
    let repos = Arc::new(MemoryRepos::default());
    let employers = service(repos);

    let result = employers
        .create_employer(NewEmployer {
            user_id: uuid::Uuid::new_v4(),
            company_name: "Ghost Inc".to_string(),
            contact_info: None,
            position: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_update_full_replace() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employer = seed_employer(&repos, user.id, "Acme").await;
    let employers = service(repos);

    let updated = employers
        .update_employer(
            employer.id,
            EmployerUpdate {
                company_name: "Acme GmbH".to_string(),
                contact_info: Some("hr@acme.example".to_string()),
                position: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.company_name, "Acme GmbH");
    assert_eq!(updated.contact_info.as_deref(), Some("hr@acme.example"));
    assert!(updated.position.is_none());
}

#[tokio::test]
async fn test_search_by_company_substring() {
    let repos = Arc::new(MemoryRepos::default());
    let user_a = seed_user(&repos, "a@example.com", UserRole::Employer).await;
    let user_b = seed_user(&repos, "b@example.com", UserRole::Employer).await;
    seed_employer(&repos, user_a.id, "Acme Robotics").await;
    seed_employer(&repos, user_b.id, "Globex").await;
    let employers = service(repos);

    let hits = employers.search_by_company("Robo".to_string()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].company_name, "Acme Robotics");

    let none = employers.search_by_company("Initech".to_string()).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_delete_blocked_by_jobs() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employer = seed_employer(&repos, user.id, "Acme").await;

    repos
        .jobs()
        .create(NewJob {
            employer_id: employer.id,
            title: "Engineer".to_string(),
            description: "Build".to_string(),
            location: "Remote".to_string(),
            salary: None,
            skills_required: None,
            eligibility: None,
        })
        .await
        .unwrap();

    let employers = service(repos);
    let result = employers.delete_employer(employer.id).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::DependencyConflict(_)
    ));
}

#[tokio::test]
async fn test_get_by_user() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employer = seed_employer(&repos, user.id, "Acme").await;
    let employers = service(repos);

    let found = employers.get_by_user(user.id).await.unwrap();
    assert_eq!(found.id, employer.id);

    let missing = employers.get_by_user(uuid::Uuid::new_v4()).await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound));
}
