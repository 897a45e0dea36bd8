//! Application handlers.
//!
//! Review, shortlist, and interview routes belong to the employer who
//! posted the job; submission belongs to the applicant.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{
    Application, ApplicationResponse, ApplicationUpdate, NewApplication, UserRole,
};
use crate::errors::{AppError, AppResult};

/// Application submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationRequest {
    pub job_id: i32,
    pub resume_id: i32,
    pub cover_letter: Option<String>,
    /// Applicant (admin only; defaults to the caller's profile)
    pub job_seeker_id: Option<Uuid>,
}

/// Application update request (full replace of mutable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationRequest {
    pub cover_letter: Option<String>,
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "Interview")]
    pub status: String,
    pub notes: Option<String>,
    pub employer_feedback: Option<String>,
}

/// Review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReviewRequest {
    /// Optional reviewer notes, overwrites existing notes when present
    pub notes: Option<String>,
}

/// Shortlist request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ShortlistRequest {
    pub shortlisted: bool,
}

/// Interview scheduling request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InterviewRequest {
    /// Interview date and time (UTC)
    pub date: DateTime<Utc>,
}

/// Create application routes
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_applications).post(create_application))
        .route("/me", get(list_own_applications))
        .route("/job/:job_id", get(list_by_job))
        .route("/status/:status", get(list_by_status))
        .route(
            "/:id",
            get(get_application)
                .put(update_application)
                .delete(delete_application),
        )
        .route("/:id/review", post(review_application))
        .route("/:id/shortlist", post(shortlist_application))
        .route("/:id/interview", post(schedule_interview))
}

/// True when the caller is the employer who posted the job behind this
/// application
async fn caller_owns_job(
    state: &AppState,
    current_user: &CurrentUser,
    application: &Application,
) -> AppResult<bool> {
    let employer = match state.employer_service.get_by_user(current_user.id).await {
        Ok(employer) => employer,
        Err(_) => return Ok(false),
    };
    let job = state.job_service.get_job(application.job_id).await?;
    Ok(job.employer_id == employer.id)
}

/// True when the caller is the applicant
async fn caller_is_applicant(
    state: &AppState,
    current_user: &CurrentUser,
    application: &Application,
) -> AppResult<bool> {
    let job_seeker = match state.job_seeker_service.get_by_user(current_user.id).await {
        Ok(job_seeker) => job_seeker,
        Err(_) => return Ok(false),
    };
    Ok(application.job_seeker_id == job_seeker.id)
}

/// Load an application for an employer-side operation (job owner or admin)
async fn load_for_employer(
    state: &AppState,
    current_user: &CurrentUser,
    id: i32,
) -> AppResult<Application> {
    let application = state.application_service.get_application(id).await?;

    if !current_user.is_admin() && !caller_owns_job(state, current_user, &application).await? {
        return Err(AppError::Forbidden);
    }

    Ok(application)
}

/// List all applications (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/applications",
    tag = "Applications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of applications", body = Vec<ApplicationResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_applications(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ApplicationResponse>>> {
    require_admin(&current_user)?;
    let applications = state.application_service.list_applications().await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// List the caller's applications
#[utoipa::path(
    get,
    path = "/api/v1/applications/me",
    tag = "Applications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications submitted by the caller", body = Vec<ApplicationResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No job seeker profile for this user")
    )
)]
pub async fn list_own_applications(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ApplicationResponse>>> {
    let job_seeker = state
        .job_seeker_service
        .get_by_user(current_user.id)
        .await?;
    let applications = state
        .application_service
        .list_by_job_seeker(job_seeker.id)
        .await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// List applications for a job (posting employer or admin)
#[utoipa::path(
    get,
    path = "/api/v1/applications/job/{job_id}",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applications for the job", body = Vec<ApplicationResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn list_by_job(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> AppResult<Json<Vec<ApplicationResponse>>> {
    let job = state.job_service.get_job(job_id).await?;

    if !current_user.is_admin() {
        let employer = state
            .employer_service
            .get_by_user(current_user.id)
            .await
            .map_err(|_| AppError::Forbidden)?;
        if job.employer_id != employer.id {
            return Err(AppError::Forbidden);
        }
    }

    let applications = state.application_service.list_by_job(job_id).await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// List applications with an exact status value (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/applications/status/{status}",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("status" = String, Path, description = "Status value, e.g. Applied")
    ),
    responses(
        (status = 200, description = "Applications with the given status", body = Vec<ApplicationResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_by_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<ApplicationResponse>>> {
    require_admin(&current_user)?;
    let applications = state.application_service.list_by_status(status).await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Get application by ID (applicant, posting employer, or admin)
#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application", body = ApplicationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn get_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApplicationResponse>> {
    let application = state.application_service.get_application(id).await?;

    let allowed = current_user.is_admin()
        || caller_is_applicant(&state, &current_user, &application).await?
        || caller_owns_job(&state, &current_user, &application).await?;
    if !allowed {
        return Err(AppError::Forbidden);
    }

    Ok(Json(ApplicationResponse::from(application)))
}

/// Submit an application (job seeker role)
#[utoipa::path(
    post,
    path = "/api/v1/applications",
    tag = "Applications",
    security(("bearer_auth" = [])),
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateApplicationRequest>,
) -> AppResult<(StatusCode, Json<ApplicationResponse>)> {
    require_role(&current_user, UserRole::JobSeeker)?;

    let job_seeker_id = match payload.job_seeker_id {
        Some(target) if current_user.is_admin() => target,
        Some(_) => return Err(AppError::Forbidden),
        None => {
            state
                .job_seeker_service
                .get_by_user(current_user.id)
                .await
                .map_err(|_| {
                    AppError::validation("Create a job seeker profile before applying")
                })?
                .id
        }
    };

    let application = state
        .application_service
        .create_application(NewApplication {
            job_id: payload.job_id,
            job_seeker_id,
            resume_id: payload.resume_id,
            cover_letter: payload.cover_letter,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

/// Update an application (posting employer or admin)
#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationRequest,
    responses(
        (status = 200, description = "Application updated", body = ApplicationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn update_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateApplicationRequest>,
) -> AppResult<Json<ApplicationResponse>> {
    load_for_employer(&state, &current_user, id).await?;

    let application = state
        .application_service
        .update_application(
            id,
            ApplicationUpdate {
                cover_letter: payload.cover_letter,
                status: payload.status,
                notes: payload.notes,
                employer_feedback: payload.employer_feedback,
            },
        )
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

/// Withdraw or remove an application (applicant or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn delete_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let application = state.application_service.get_application(id).await?;

    let allowed = current_user.is_admin()
        || caller_is_applicant(&state, &current_user, &application).await?;
    if !allowed {
        return Err(AppError::Forbidden);
    }

    state.application_service.delete_application(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark an application reviewed (posting employer or admin)
#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/review",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Application marked reviewed", body = ApplicationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn review_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ReviewRequest>,
) -> AppResult<Json<ApplicationResponse>> {
    load_for_employer(&state, &current_user, id).await?;

    let application = state
        .application_service
        .mark_reviewed(id, payload.notes)
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

/// Set the shortlist flag (posting employer or admin)
#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/shortlist",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = ShortlistRequest,
    responses(
        (status = 200, description = "Shortlist flag updated", body = ApplicationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn shortlist_application(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ShortlistRequest>,
) -> AppResult<Json<ApplicationResponse>> {
    load_for_employer(&state, &current_user, id).await?;

    let application = state
        .application_service
        .set_shortlisted(id, payload.shortlisted)
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

/// Schedule an interview (posting employer or admin)
#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/interview",
    tag = "Applications",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = InterviewRequest,
    responses(
        (status = 200, description = "Interview scheduled", body = ApplicationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn schedule_interview(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<InterviewRequest>,
) -> AppResult<Json<ApplicationResponse>> {
    load_for_employer(&state, &current_user, id).await?;

    let application = state
        .application_service
        .schedule_interview(id, payload.date)
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}
