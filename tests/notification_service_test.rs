//! Notification service tests: persistence, email flag, read state,
//! unsent sweep.

mod common;

use std::sync::Arc;

use common::{seed_user, MemoryRepos};
use jobboard_api::domain::{NewNotification, UserRole};
use jobboard_api::errors::AppError;
use jobboard_api::infra::Mailer;
use jobboard_api::services::{NotificationManager, NotificationService};

fn service(repos: Arc<MemoryRepos>) -> NotificationManager<MemoryRepos> {
    NotificationManager::new(repos, Arc::new(Mailer::disabled()))
}

fn new_notification(user_id: uuid::Uuid, send_email: bool) -> NewNotification {
    NewNotification {
        user_id,
        subject: "Subject".to_string(),
        message: "Body".to_string(),
        send_email,
    }
}

#[tokio::test]
async fn test_create_without_email_stays_unsent() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let notifications = service(repos);

    let created = notifications
        .create_notification(new_notification(user.id, false))
        .await
        .unwrap();

    assert!(!created.sent_email);
    assert!(!created.is_read);

    // Visible to the external retry sweep
    let unsent = notifications.list_unsent_email().await.unwrap();
    assert_eq!(unsent.len(), 1);
    assert_eq!(unsent[0].id, created.id);
}

#[tokio::test]
async fn test_create_with_email_marks_sent_on_success() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let notifications = service(repos);

    // The disabled mailer logs and reports success (development mode)
    let created = notifications
        .create_notification(new_notification(user.id, true))
        .await
        .unwrap();

    assert!(created.sent_email);
    assert!(notifications.list_unsent_email().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_for_unknown_user_fails() {
    let repos = Arc::new(MemoryRepos::default());
    let notifications = service(repos);

    let result = notifications
        .create_notification(new_notification(uuid::Uuid::new_v4(), false))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[tokio::test]
async fn test_mark_read() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let notifications = service(repos);

    let created = notifications
        .create_notification(new_notification(user.id, false))
        .await
        .unwrap();

    let read = notifications.mark_read(created.id).await.unwrap();
    assert!(read.is_read);

    assert!(matches!(
        notifications.mark_read(9999).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_list_by_user_is_scoped() {
    let repos = Arc::new(MemoryRepos::default());
    let alice = seed_user(&repos, "alice@example.com", UserRole::JobSeeker).await;
    let bob = seed_user(&repos, "bob@example.com", UserRole::Employer).await;
    let notifications = service(repos);

    notifications
        .create_notification(new_notification(alice.id, false))
        .await
        .unwrap();
    notifications
        .create_notification(new_notification(alice.id, false))
        .await
        .unwrap();
    notifications
        .create_notification(new_notification(bob.id, false))
        .await
        .unwrap();

    assert_eq!(notifications.list_by_user(alice.id).await.unwrap().len(), 2);
    assert_eq!(notifications.list_by_user(bob.id).await.unwrap().len(), 1);
    assert_eq!(notifications.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_then_get_not_found() {
    let repos = Arc::new(MemoryRepos::default());
    let user = seed_user(&repos, "user@example.com", UserRole::JobSeeker).await;
    let notifications = service(repos);

    let created = notifications
        .create_notification(new_notification(user.id, false))
        .await
        .unwrap();

    notifications.delete_notification(created.id).await.unwrap();
    assert!(matches!(
        notifications.get_notification(created.id).await.unwrap_err(),
        AppError::NotFound
    ));
}
