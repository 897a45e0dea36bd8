//! Job seeker service tests: profile uniqueness and the delete guard.

mod common;

use std::sync::Arc;

use common::{seed_job_seeker, seed_user, MemoryRepos};
use jobboard_api::domain::{NewJobSeeker, NewResume, UserRole};
use jobboard_api::errors::AppError;
use jobboard_api::infra::Repositories;
use jobboard_api::services::{JobSeekerManager, JobSeekerService};

fn service(repos: Arc<MemoryRepos>) -> JobSeekerManager<MemoryRepos> {
    JobSeekerManager::new(repos)
}

#[tokio::test]
async fn test_one_profile_per_user() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "seeker@example.com", UserRole::JobSeeker).await;
    let job_seekers = service(repos);

    let input = NewJobSeeker {
        user_id: user.id,
        education_details: None,
        skills: None,
        college: None,
        work_status: None,
        experience_years: None,
    };

    job_seekers.create_job_seeker(input.clone()).await.unwrap();

    let result = job_seekers.create_job_seeker(input).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_requires_existing_user() {
    let repos = Arc::new(MemoryRepos::default());
    let job_seekers = service(repos);

    let result = job_seekers
        .create_job_seeker(NewJobSeeker {
            user_id: uuid::Uuid::new_v4(),
            education_details: None,
            skills: None,
            college: None,
            work_status: None,
            experience_years: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_delete_guard_blocks_with_resumes() {
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

    let job_seekers = service(repos.clone());
    let result = job_seekers.delete_job_seeker(job_seeker.id).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::DependencyConflict(_)
    ));

    // The row survives the failed delete
    assert!(job_seekers.get_job_seeker(job_seeker.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_succeeds_once_dependents_removed() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "seeker@example.com", UserRole::JobSeeker).await;
    let job_seeker = seed_job_seeker(&repos, user.id).await;

    let resume = repos
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

    let job_seekers = service(repos.clone());
    assert!(job_seekers.delete_job_seeker(job_seeker.id).await.is_err());

    repos.resumes().delete(resume.id).await.unwrap();
    job_seekers.delete_job_seeker(job_seeker.id).await.unwrap();

    assert!(matches!(
        job_seekers.get_job_seeker(job_seeker.id).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_searches() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "seeker@example.com", UserRole::JobSeeker).await;
    // Seeded profile has college "State College" and skills "Rust, SQL"
    seed_job_seeker(&repos, user.id).await;
    let job_seekers = service(repos);

    let by_college = job_seekers
        .search_by_college("State".to_string())
        .await
        .unwrap();
    assert_eq!(by_college.len(), 1);

    let by_skill = job_seekers.search_by_skill("SQL".to_string()).await.unwrap();
    assert_eq!(by_skill.len(), 1);

    let none = job_seekers
        .search_by_skill("Cobol".to_string())
        .await
        .unwrap();
    assert!(none.is_empty());
}
