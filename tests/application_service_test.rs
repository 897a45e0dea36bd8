//! Application service tests: submission validation, review workflow,
//! and notification fan-out.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};

use common::{seed_employer, seed_job_seeker, seed_user, MemoryRepos};
use jobboard_api::domain::{
    ApplicationUpdate, NewApplication, NewJob, NewResume, UserRole,
};
use jobboard_api::errors::AppError;
use jobboard_api::infra::{Mailer, Repositories};
use jobboard_api::services::{
    ApplicationManager, ApplicationService, NotificationManager,
};

struct Fixture {
    repos: Arc<MemoryRepos>,
    applications: ApplicationManager<MemoryRepos>,
    seeker_user_id: uuid::Uuid,
    job_seeker_id: uuid::Uuid,
    job_id: i32,
    resume_id: i32,
}

async fn fixture() -> Fixture {
    let repos = Arc::new(MemoryRepos::default());

    let employer_user = seed_user(&repos, "boss@example.com", UserRole::Employer).await;
    let employer = seed_employer(&repos, employer_user.id, "Acme").await;
    let seeker_user = seed_user(&repos, "seeker@example.com", UserRole::JobSeeker).await;
    let job_seeker = seed_job_seeker(&repos, seeker_user.id).await;

    let job = repos
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

    let notifications = Arc::new(NotificationManager::new(
        repos.clone(),
        Arc::new(Mailer::disabled()),
    ));
    let applications = ApplicationManager::new(repos.clone(), notifications);

    Fixture {
        repos,
        applications,
        seeker_user_id: seeker_user.id,
        job_seeker_id: job_seeker.id,
        job_id: job.id,
        resume_id: resume.id,
    }
}

fn submission(f: &Fixture) -> NewApplication {
    NewApplication {
        job_id: f.job_id,
        job_seeker_id: f.job_seeker_id,
        resume_id: f.resume_id,
        cover_letter: Some("Hello".to_string()),
    }
}

#[tokio::test]
async fn test_create_sets_server_fields() {
    let f = fixture().await;

    let application = f.applications.create_application(submission(&f)).await.unwrap();

    assert!(application.id > 0);
    assert_eq!(application.status, "Applied");
    assert!(application.reviewed_at.is_none());
    assert!(!application.is_shortlisted);

    let fetched = f.applications.get_application(application.id).await.unwrap();
    assert_eq!(fetched.applied_at, application.applied_at);
    assert_eq!(fetched.cover_letter.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_create_rejects_foreign_resume() {
    let f = fixture().await;

    // Another job seeker's resume
    let other_user = seed_user(&f.repos, "other@example.com", UserRole::JobSeeker).await;
    let other_seeker = seed_job_seeker(&f.repos, other_user.id).await;
    let foreign_resume = f
        .repos
        .resumes()
        .create(NewResume {
            job_seeker_id: other_seeker.id,
            resume_name: "other.pdf".to_string(),
            file_path: "/files/other.pdf".to_string(),
            file_type: None,
            parsed_skills: None,
        })
        .await
        .unwrap();

    let result = f
        .applications
        .create_application(NewApplication {
            job_id: f.job_id,
            job_seeker_id: f.job_seeker_id,
            resume_id: foreign_resume.id,
            cover_letter: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_create_rejects_missing_references() {
    let f = fixture().await;

    let bad_job = f
        .applications
        .create_application(NewApplication {
            job_id: 9999,
            ..submission(&f)
        })
        .await;
    assert!(matches!(bad_job.unwrap_err(), AppError::Validation { .. }));

    let bad_resume = f
        .applications
        .create_application(NewApplication {
            resume_id: 9999,
            ..submission(&f)
        })
        .await;
    assert!(matches!(bad_resume.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_mark_reviewed_stamps_and_notifies() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    let reviewed = f
        .applications
        .mark_reviewed(application.id, Some("Strong candidate".to_string()))
        .await
        .unwrap();

    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(reviewed.notes.as_deref(), Some("Strong candidate"));

    // Fan-out: the applicant's user received a notification
    let inbox = f
        .repos
        .notifications()
        .list_by_user(f.seeker_user_id)
        .await
        .unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].subject, "Application reviewed");
}

#[tokio::test]
async fn test_mark_reviewed_keeps_existing_notes_when_none_given() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    f.applications
        .mark_reviewed(application.id, Some("First pass".to_string()))
        .await
        .unwrap();
    let again = f.applications.mark_reviewed(application.id, None).await.unwrap();

    assert_eq!(again.notes.as_deref(), Some("First pass"));
}

#[tokio::test]
async fn test_shortlist_and_interview_fan_out() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    let shortlisted = f
        .applications
        .set_shortlisted(application.id, true)
        .await
        .unwrap();
    assert!(shortlisted.is_shortlisted);

    let date = Utc::now() + Duration::days(7);
    let scheduled = f
        .applications
        .schedule_interview(application.id, date)
        .await
        .unwrap();
    assert_eq!(scheduled.interview_date, Some(date));

    let inbox = f
        .repos
        .notifications()
        .list_by_user(f.seeker_user_id)
        .await
        .unwrap();
    let subjects: Vec<_> = inbox.iter().map(|n| n.subject.as_str()).collect();
    assert!(subjects.contains(&"Application shortlisted"));
    assert!(subjects.contains(&"Interview scheduled"));
}

#[tokio::test]
async fn test_unshortlisting_does_not_notify() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    f.applications
        .set_shortlisted(application.id, false)
        .await
        .unwrap();

    let inbox = f
        .repos
        .notifications()
        .list_by_user(f.seeker_user_id)
        .await
        .unwrap();
    assert!(inbox.is_empty());
}

#[tokio::test]
async fn test_update_accepts_any_status_value() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    let updated = f
        .applications
        .update_application(
            application.id,
            ApplicationUpdate {
                cover_letter: None,
                status: "On-hold-pending-budget".to_string(),
                notes: None,
                employer_feedback: Some("Circle back in Q3".to_string()),
            },
        )
        .await
        .unwrap();

    // No transition state machine: free text is preserved verbatim
    assert_eq!(updated.status, "On-hold-pending-budget");
    assert_eq!(updated.employer_feedback.as_deref(), Some("Circle back in Q3"));

    let by_status = f
        .applications
        .list_by_status("On-hold-pending-budget".to_string())
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
}

#[tokio::test]
async fn test_delete_then_get_not_found() {
    let f = fixture().await;
    let application = f.applications.create_application(submission(&f)).await.unwrap();

    f.applications.delete_application(application.id).await.unwrap();

    assert!(matches!(
        f.applications.get_application(application.id).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_operations_on_missing_application() {
    let f = fixture().await;

    assert!(matches!(
        f.applications.mark_reviewed(404, None).await.unwrap_err(),
        AppError::NotFound
    ));
    assert!(matches!(
        f.applications.set_shortlisted(404, true).await.unwrap_err(),
        AppError::NotFound
    ));
}
