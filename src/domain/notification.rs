//! Notification domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Notification entity. `sent_email` records whether the best-effort
/// email delivery succeeded; unsent rows are picked up by the external
/// retry sweep.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i32,
    pub user_id: Uuid,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub sent_email: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a notification
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub subject: String,
    pub message: String,
    /// Attempt synchronous email delivery after persisting
    pub send_email: bool,
}

/// Notification response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: i32,
    pub user_id: Uuid,
    #[schema(example = "Application update")]
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub sent_email: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            subject: n.subject,
            message: n.message,
            is_read: n.is_read,
            sent_email: n.sent_email,
            created_at: n.created_at,
        }
    }
}
