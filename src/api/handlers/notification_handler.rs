//! Notification handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{NewNotification, Notification, NotificationResponse};
use crate::errors::{AppError, AppResult};

/// Notification creation request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "Subject is required"))]
    #[schema(example = "Application update")]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Attempt email delivery after persisting
    #[serde(default)]
    pub send_email: bool,
}

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_notification))
        .route("/me", get(list_own_notifications))
        .route("/unsent-email", get(list_unsent_email))
        .route("/:id", get(get_notification).delete(delete_notification))
        .route("/:id/read", post(mark_notification_read))
}

/// Load a notification and enforce recipient-or-admin access
async fn load_owned(
    state: &AppState,
    current_user: &CurrentUser,
    id: i32,
) -> AppResult<Notification> {
    let notification = state.notification_service.get_notification(id).await?;
    if !current_user.owns_or_admin(notification.user_id) {
        return Err(AppError::Forbidden);
    }
    Ok(notification)
}

/// List the caller's notifications
#[utoipa::path(
    get,
    path = "/api/v1/notifications/me",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notifications for the caller", body = Vec<NotificationResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_own_notifications(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<NotificationResponse>>> {
    let notifications = state
        .notification_service
        .list_by_user(current_user.id)
        .await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// Notifications whose email was never delivered (admin only).
/// Surface for an external scheduled retry job; nothing in-process
/// drives it.
#[utoipa::path(
    get,
    path = "/api/v1/notifications/unsent-email",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notifications with sent_email = false", body = Vec<NotificationResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_unsent_email(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<NotificationResponse>>> {
    require_admin(&current_user)?;
    let notifications = state.notification_service.list_unsent_email().await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// Get notification by ID (recipient or admin)
#[utoipa::path(
    get,
    path = "/api/v1/notifications/{id}",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification", body = NotificationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn get_notification(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<NotificationResponse>> {
    let notification = load_owned(&state, &current_user, id).await?;
    Ok(Json(NotificationResponse::from(notification)))
}

/// Create a notification (admin only). Email delivery is attempted
/// synchronously and best-effort.
#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_notification(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateNotificationRequest>,
) -> AppResult<(StatusCode, Json<NotificationResponse>)> {
    require_admin(&current_user)?;

    let notification = state
        .notification_service
        .create_notification(NewNotification {
            user_id: payload.user_id,
            subject: payload.subject,
            message: payload.message,
            send_email: payload.send_email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationResponse::from(notification)),
    ))
}

/// Mark a notification read (recipient or admin)
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_notification_read(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<NotificationResponse>> {
    load_owned(&state, &current_user, id).await?;

    let notification = state.notification_service.mark_read(id).await?;
    Ok(Json(NotificationResponse::from(notification)))
}

/// Delete a notification (recipient or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{id}",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn delete_notification(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    load_owned(&state, &current_user, id).await?;

    state.notification_service.delete_notification(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
