//! Admin handlers: aggregate statistics and the deactivated-account purge.

use axum::{
    extract::{Extension, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::config::DEFAULT_PURGE_AFTER_DAYS;
use crate::errors::AppResult;

/// Per-entity row counts.
///
/// Each count comes from the entity repository's explicit `count()`,
/// no runtime type inspection involved.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatsResponse {
    pub users: u64,
    pub employers: u64,
    pub job_seekers: u64,
    pub jobs: u64,
    pub resumes: u64,
    pub applications: u64,
    pub notifications: u64,
}

/// Purge query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct PurgeQuery {
    /// Retention window in days (default 30)
    pub days: Option<i64>,
}

/// Purge result
#[derive(Debug, Serialize, ToSchema)]
pub struct PurgeResponse {
    /// Number of permanently deleted accounts
    pub purged: u64,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/purge-deactivated", post(purge_deactivated))
}

/// Aggregate entity counts (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Entity counts", body = AdminStatsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn get_stats(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<AdminStatsResponse>> {
    require_admin(&current_user)?;

    let stats = AdminStatsResponse {
        users: state.user_service.count().await?,
        employers: state.employer_service.count().await?,
        job_seekers: state.job_seeker_service.count().await?,
        jobs: state.job_service.count().await?,
        resumes: state.resume_service.count().await?,
        applications: state.application_service.count().await?,
        notifications: state.notification_service.count().await?,
    };

    Ok(Json(stats))
}

/// Hard-delete accounts deactivated before the retention cutoff
/// (admin only). Intended to be called by an external scheduler.
#[utoipa::path(
    post,
    path = "/api/v1/admin/purge-deactivated",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(PurgeQuery),
    responses(
        (status = 200, description = "Purge completed", body = PurgeResponse),
        (status = 400, description = "Invalid retention window"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn purge_deactivated(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<PurgeQuery>,
) -> AppResult<Json<PurgeResponse>> {
    require_admin(&current_user)?;

    let days = query.days.unwrap_or(DEFAULT_PURGE_AFTER_DAYS);
    let purged = state.user_service.purge_deactivated(days).await?;

    Ok(Json(PurgeResponse { purged }))
}
