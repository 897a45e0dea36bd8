//! Resume handlers.

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
use crate::api::middleware::{require_admin, require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{NewResume, Resume, ResumeResponse, ResumeUpdate, UserRole};
use crate::errors::{AppError, AppResult};

/// Resume creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateResumeRequest {
    #[validate(length(min = 1, message = "Resume name is required"))]
    #[schema(example = "backend-2024.pdf")]
    pub resume_name: String,
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    #[schema(example = "application/pdf")]
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
    /// Target job seeker (admin only; defaults to the caller's profile)
    pub job_seeker_id: Option<Uuid>,
}

/// Resume update request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateResumeRequest {
    #[validate(length(min = 1, message = "Resume name is required"))]
    pub resume_name: String,
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
}

/// Create resume routes
pub fn resume_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resumes).post(create_resume))
        .route("/me", get(list_own_resumes))
        .route("/job-seeker/:job_seeker_id", get(list_by_job_seeker))
        .route(
            "/:id",
            get(get_resume).put(update_resume).delete(delete_resume),
        )
        .route("/:id/default", post(set_default_resume))
}

/// Load a resume and enforce that the caller's job seeker profile owns
/// it (admins pass)
async fn load_owned(state: &AppState, current_user: &CurrentUser, id: i32) -> AppResult<Resume> {
    let resume = state.resume_service.get_resume(id).await?;

    if current_user.is_admin() {
        return Ok(resume);
    }

    let job_seeker = state
        .job_seeker_service
        .get_by_user(current_user.id)
        .await
        .map_err(|_| AppError::Forbidden)?;

    if resume.job_seeker_id != job_seeker.id {
        return Err(AppError::Forbidden);
    }

    Ok(resume)
}

/// List all resumes (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/resumes",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of resumes", body = Vec<ResumeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_resumes(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResumeResponse>>> {
    require_admin(&current_user)?;
    let resumes = state.resume_service.list_resumes().await?;
    Ok(Json(resumes.into_iter().map(ResumeResponse::from).collect()))
}

/// List the caller's resumes
#[utoipa::path(
    get,
    path = "/api/v1/resumes/me",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Resumes owned by the caller", body = Vec<ResumeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No job seeker profile for this user")
    )
)]
pub async fn list_own_resumes(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResumeResponse>>> {
    let job_seeker = state
        .job_seeker_service
        .get_by_user(current_user.id)
        .await?;
    let resumes = state
        .resume_service
        .list_by_job_seeker(job_seeker.id)
        .await?;
    Ok(Json(resumes.into_iter().map(ResumeResponse::from).collect()))
}

/// List resumes of a job seeker (owner or admin)
#[utoipa::path(
    get,
    path = "/api/v1/resumes/job-seeker/{job_seeker_id}",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    params(
        ("job_seeker_id" = Uuid, Path, description = "Job seeker ID")
    ),
    responses(
        (status = 200, description = "Resumes owned by the job seeker", body = Vec<ResumeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job seeker not found")
    )
)]
pub async fn list_by_job_seeker(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(job_seeker_id): Path<Uuid>,
) -> AppResult<Json<Vec<ResumeResponse>>> {
    let job_seeker = state
        .job_seeker_service
        .get_job_seeker(job_seeker_id)
        .await?;
    if !current_user.owns_or_admin(job_seeker.user_id) {
        return Err(AppError::Forbidden);
    }

    let resumes = state
        .resume_service
        .list_by_job_seeker(job_seeker_id)
        .await?;
    Ok(Json(resumes.into_iter().map(ResumeResponse::from).collect()))
}

/// Get resume by ID (owner or admin)
#[utoipa::path(
    get,
    path = "/api/v1/resumes/{id}",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Resume ID")
    ),
    responses(
        (status = 200, description = "Resume", body = ResumeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Resume not found")
    )
)]
pub async fn get_resume(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResumeResponse>> {
    let resume = load_owned(&state, &current_user, id).await?;
    Ok(Json(ResumeResponse::from(resume)))
}

/// Upload a resume record (job seeker role)
#[utoipa::path(
    post,
    path = "/api/v1/resumes",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    request_body = CreateResumeRequest,
    responses(
        (status = 201, description = "Resume created", body = ResumeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_resume(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateResumeRequest>,
) -> AppResult<(StatusCode, Json<ResumeResponse>)> {
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
                    AppError::validation("Create a job seeker profile before uploading resumes")
                })?
                .id
        }
    };

    let resume = state
        .resume_service
        .create_resume(NewResume {
            job_seeker_id,
            resume_name: payload.resume_name,
            file_path: payload.file_path,
            file_type: payload.file_type,
            parsed_skills: payload.parsed_skills,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ResumeResponse::from(resume))))
}

/// Update a resume (owner or admin)
#[utoipa::path(
    put,
    path = "/api/v1/resumes/{id}",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Resume ID")
    ),
    request_body = UpdateResumeRequest,
    responses(
        (status = 200, description = "Resume updated", body = ResumeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Resume not found")
    )
)]
pub async fn update_resume(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateResumeRequest>,
) -> AppResult<Json<ResumeResponse>> {
    load_owned(&state, &current_user, id).await?;

    let resume = state
        .resume_service
        .update_resume(
            id,
            ResumeUpdate {
                resume_name: payload.resume_name,
                file_path: payload.file_path,
                file_type: payload.file_type,
                parsed_skills: payload.parsed_skills,
            },
        )
        .await?;

    Ok(Json(ResumeResponse::from(resume)))
}

/// Delete a resume (owner or admin); blocked while applications
/// reference it
#[utoipa::path(
    delete,
    path = "/api/v1/resumes/{id}",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Resume ID")
    ),
    responses(
        (status = 204, description = "Resume deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Resume not found"),
        (status = 409, description = "Resume is referenced by applications")
    )
)]
pub async fn delete_resume(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    load_owned(&state, &current_user, id).await?;

    state.resume_service.delete_resume(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Make this resume the caller's single default
#[utoipa::path(
    post,
    path = "/api/v1/resumes/{id}/default",
    tag = "Resumes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Resume ID")
    ),
    responses(
        (status = 200, description = "Default resume set", body = ResumeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Resume not found")
    )
)]
pub async fn set_default_resume(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResumeResponse>> {
    let resume = load_owned(&state, &current_user, id).await?;

    let resume = state
        .resume_service
        .set_default(resume.job_seeker_id, resume.id)
        .await?;

    Ok(Json(ResumeResponse::from(resume)))
}
