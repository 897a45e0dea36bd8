//! Job seeker handlers.

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
use crate::domain::{JobSeeker, JobSeekerResponse, JobSeekerUpdate, NewJobSeeker, UserRole};
use crate::errors::{AppError, AppResult};

/// Job seeker creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobSeekerRequest {
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience_years: Option<i32>,
    /// Target user (admin only; defaults to the caller)
    pub user_id: Option<Uuid>,
}

/// Job seeker update request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateJobSeekerRequest {
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience_years: Option<i32>,
}

/// Job seeker search query; exactly one field is used
#[derive(Debug, Deserialize, IntoParams)]
pub struct JobSeekerSearchQuery {
    /// College substring
    pub college: Option<String>,
    /// Skill substring
    pub skill: Option<String>,
}

/// Create job seeker routes
pub fn job_seeker_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_job_seekers).post(create_job_seeker))
        .route("/me", get(get_own_job_seeker))
        .route("/search", get(search_job_seekers))
        .route(
            "/:id",
            get(get_job_seeker)
                .put(update_job_seeker)
                .delete(delete_job_seeker),
        )
}

/// Resolve a job seeker and enforce that the caller owns it (or is admin)
async fn load_owned(
    state: &AppState,
    current_user: &CurrentUser,
    id: Uuid,
) -> AppResult<JobSeeker> {
    let job_seeker = state.job_seeker_service.get_job_seeker(id).await?;
    if !current_user.owns_or_admin(job_seeker.user_id) {
        return Err(AppError::Forbidden);
    }
    Ok(job_seeker)
}

/// List all job seekers
#[utoipa::path(
    get,
    path = "/api/v1/job-seekers",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of job seekers", body = Vec<JobSeekerResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_job_seekers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<JobSeekerResponse>>> {
    let job_seekers = state.job_seeker_service.list_job_seekers().await?;
    Ok(Json(
        job_seekers
            .into_iter()
            .map(JobSeekerResponse::from)
            .collect(),
    ))
}

/// Get the caller's job seeker profile
#[utoipa::path(
    get,
    path = "/api/v1/job-seekers/me",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Job seeker profile", body = JobSeekerResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No job seeker profile for this user")
    )
)]
pub async fn get_own_job_seeker(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<JobSeekerResponse>> {
    let job_seeker = state
        .job_seeker_service
        .get_by_user(current_user.id)
        .await?;
    Ok(Json(JobSeekerResponse::from(job_seeker)))
}

/// Search job seekers by college or skill substring
#[utoipa::path(
    get,
    path = "/api/v1/job-seekers/search",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    params(JobSeekerSearchQuery),
    responses(
        (status = 200, description = "Matching job seekers", body = Vec<JobSeekerResponse>),
        (status = 400, description = "Missing search parameter"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_job_seekers(
    State(state): State<AppState>,
    Query(query): Query<JobSeekerSearchQuery>,
) -> AppResult<Json<Vec<JobSeekerResponse>>> {
    let job_seekers = if let Some(college) = query.college {
        state.job_seeker_service.search_by_college(college).await?
    } else if let Some(skill) = query.skill {
        state.job_seeker_service.search_by_skill(skill).await?
    } else {
        return Err(AppError::validation(
            "Provide a 'college' or 'skill' query parameter",
        ));
    };

    Ok(Json(
        job_seekers
            .into_iter()
            .map(JobSeekerResponse::from)
            .collect(),
    ))
}

/// Get job seeker by ID
#[utoipa::path(
    get,
    path = "/api/v1/job-seekers/{id}",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Job seeker ID")
    ),
    responses(
        (status = 200, description = "Job seeker profile", body = JobSeekerResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Job seeker not found")
    )
)]
pub async fn get_job_seeker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobSeekerResponse>> {
    let job_seeker = state.job_seeker_service.get_job_seeker(id).await?;
    Ok(Json(JobSeekerResponse::from(job_seeker)))
}

/// Create a job seeker profile (job seeker role; admins may target any user)
#[utoipa::path(
    post,
    path = "/api/v1/job-seekers",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    request_body = CreateJobSeekerRequest,
    responses(
        (status = 201, description = "Job seeker created", body = JobSeekerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Job seeker profile already exists")
    )
)]
pub async fn create_job_seeker(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateJobSeekerRequest>,
) -> AppResult<(StatusCode, Json<JobSeekerResponse>)> {
    require_role(&current_user, UserRole::JobSeeker)?;

    let user_id = match payload.user_id {
        Some(target) if target != current_user.id => {
            if !current_user.is_admin() {
                return Err(AppError::Forbidden);
            }
            target
        }
        _ => current_user.id,
    };

    let job_seeker = state
        .job_seeker_service
        .create_job_seeker(NewJobSeeker {
            user_id,
            education_details: payload.education_details,
            skills: payload.skills,
            college: payload.college,
            work_status: payload.work_status,
            experience_years: payload.experience_years,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobSeekerResponse::from(job_seeker)),
    ))
}

/// Update a job seeker profile (owner or admin)
#[utoipa::path(
    put,
    path = "/api/v1/job-seekers/{id}",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Job seeker ID")
    ),
    request_body = UpdateJobSeekerRequest,
    responses(
        (status = 200, description = "Job seeker updated", body = JobSeekerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job seeker not found")
    )
)]
pub async fn update_job_seeker(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateJobSeekerRequest>,
) -> AppResult<Json<JobSeekerResponse>> {
    load_owned(&state, &current_user, id).await?;

    let job_seeker = state
        .job_seeker_service
        .update_job_seeker(
            id,
            JobSeekerUpdate {
                education_details: payload.education_details,
                skills: payload.skills,
                college: payload.college,
                work_status: payload.work_status,
                experience_years: payload.experience_years,
            },
        )
        .await?;

    Ok(Json(JobSeekerResponse::from(job_seeker)))
}

/// Delete a job seeker profile (owner or admin).
/// Fails while resumes or applications exist.
#[utoipa::path(
    delete,
    path = "/api/v1/job-seekers/{id}",
    tag = "JobSeekers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Job seeker ID")
    ),
    responses(
        (status = 204, description = "Job seeker deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job seeker not found"),
        (status = 409, description = "Job seeker has resumes or applications")
    )
)]
pub async fn delete_job_seeker(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    load_owned(&state, &current_user, id).await?;

    state.job_seeker_service.delete_job_seeker(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
