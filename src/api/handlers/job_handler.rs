//! Job posting handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{Job, JobResponse, JobUpdate, NewJob, UserRole};
use crate::errors::{AppError, AppResult};

/// Job creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Backend Engineer")]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Location is required"))]
    #[schema(example = "Berlin")]
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    /// Posting employer (admin only; defaults to the caller's profile)
    pub employer_id: Option<Uuid>,
}

/// Job update request (full replace; status is free text)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "Open")]
    pub status: String,
}

/// Job search query; exactly one field is used
#[derive(Debug, Deserialize, IntoParams)]
pub struct JobSearchQuery {
    /// Title substring
    pub title: Option<String>,
    /// Location substring
    pub location: Option<String>,
    /// Required-skill substring
    pub skill: Option<String>,
}

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/search", get(search_jobs))
        .route("/status/:status", get(list_jobs_by_status))
        .route("/employer/:employer_id", get(list_jobs_by_employer))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
}

/// Load a job and enforce that the caller's employer profile owns it
/// (admins pass)
async fn load_owned(state: &AppState, current_user: &CurrentUser, id: i32) -> AppResult<Job> {
    let job = state.job_service.get_job(id).await?;

    if current_user.is_admin() {
        return Ok(job);
    }

    let employer = state
        .employer_service
        .get_by_user(current_user.id)
        .await
        .map_err(|_| AppError::Forbidden)?;

    if job.employer_id != employer.id {
        return Err(AppError::Forbidden);
    }

    Ok(job)
}

/// List all jobs
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of jobs", body = Vec<JobResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<Json<Vec<JobResponse>>> {
    let jobs = state.job_service.list_jobs().await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Search jobs by title, location, or skill substring
#[utoipa::path(
    get,
    path = "/api/v1/jobs/search",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(JobSearchQuery),
    responses(
        (status = 200, description = "Matching jobs", body = Vec<JobResponse>),
        (status = 400, description = "Missing search parameter"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let jobs = if let Some(title) = query.title {
        state.job_service.search_by_title(title).await?
    } else if let Some(location) = query.location {
        state.job_service.search_by_location(location).await?
    } else if let Some(skill) = query.skill {
        state.job_service.search_by_skill(skill).await?
    } else {
        return Err(AppError::validation(
            "Provide a 'title', 'location', or 'skill' query parameter",
        ));
    };

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// List jobs with an exact status value
#[utoipa::path(
    get,
    path = "/api/v1/jobs/status/{status}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(
        ("status" = String, Path, description = "Status value, e.g. Open")
    ),
    responses(
        (status = 200, description = "Jobs with the given status", body = Vec<JobResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let jobs = state.job_service.list_by_status(status).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// List jobs posted by an employer
#[utoipa::path(
    get,
    path = "/api/v1/jobs/employer/{employer_id}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(
        ("employer_id" = Uuid, Path, description = "Employer ID")
    ),
    responses(
        (status = 200, description = "Jobs posted by the employer", body = Vec<JobResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_jobs_by_employer(
    State(state): State<AppState>,
    Path(employer_id): Path<Uuid>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let jobs = state.job_service.list_by_employer(employer_id).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Get job by ID
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job posting", body = JobResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<JobResponse>> {
    let job = state.job_service.get_job(id).await?;
    Ok(Json(JobResponse::from(job)))
}

/// Create a job posting (employer role). The response carries the
/// generated id, status "Open", and created_at.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_job(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateJobRequest>,
) -> AppResult<(StatusCode, Json<JobResponse>)> {
    require_role(&current_user, UserRole::Employer)?;

    let employer_id = match payload.employer_id {
        Some(target) if current_user.is_admin() => target,
        Some(_) => return Err(AppError::Forbidden),
        None => {
            state
                .employer_service
                .get_by_user(current_user.id)
                .await
                .map_err(|_| {
                    AppError::validation("Create an employer profile before posting jobs")
                })?
                .id
        }
    };

    let job = state
        .job_service
        .create_job(NewJob {
            employer_id,
            title: payload.title,
            description: payload.description,
            location: payload.location,
            salary: payload.salary,
            skills_required: payload.skills_required,
            eligibility: payload.eligibility,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

/// Update a job posting (posting employer or admin)
#[utoipa::path(
    put,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn update_job(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateJobRequest>,
) -> AppResult<Json<JobResponse>> {
    load_owned(&state, &current_user, id).await?;

    let job = state
        .job_service
        .update_job(
            id,
            JobUpdate {
                title: payload.title,
                description: payload.description,
                location: payload.location,
                salary: payload.salary,
                skills_required: payload.skills_required,
                eligibility: payload.eligibility,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(JobResponse::from(job)))
}

/// Delete a job posting (posting employer or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn delete_job(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    load_owned(&state, &current_user, id).await?;

    state.job_service.delete_job(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
