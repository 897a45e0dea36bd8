//! Employer handlers.

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
use crate::domain::{Employer, EmployerResponse, EmployerUpdate, NewEmployer, UserRole};
use crate::errors::{AppError, AppResult};

/// Employer creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployerRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    pub contact_info: Option<String>,
    pub position: Option<String>,
    /// Target user (admin only; defaults to the caller)
    pub user_id: Option<Uuid>,
}

/// Employer update request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployerRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    pub contact_info: Option<String>,
    pub position: Option<String>,
}

/// Company search query
#[derive(Debug, Deserialize, IntoParams)]
pub struct EmployerSearchQuery {
    /// Company-name substring
    pub company: String,
}

/// Create employer routes
pub fn employer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employers).post(create_employer))
        .route("/me", get(get_own_employer))
        .route("/search", get(search_employers))
        .route(
            "/:id",
            get(get_employer).put(update_employer).delete(delete_employer),
        )
}

/// Resolve an employer and enforce that the caller owns it (or is admin)
async fn load_owned(
    state: &AppState,
    current_user: &CurrentUser,
    id: Uuid,
) -> AppResult<Employer> {
    let employer = state.employer_service.get_employer(id).await?;
    if !current_user.owns_or_admin(employer.user_id) {
        return Err(AppError::Forbidden);
    }
    Ok(employer)
}

/// List all employers
#[utoipa::path(
    get,
    path = "/api/v1/employers",
    tag = "Employers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of employers", body = Vec<EmployerResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_employers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployerResponse>>> {
    let employers = state.employer_service.list_employers().await?;
    Ok(Json(
        employers.into_iter().map(EmployerResponse::from).collect(),
    ))
}

/// Get the caller's employer profile
#[utoipa::path(
    get,
    path = "/api/v1/employers/me",
    tag = "Employers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employer profile", body = EmployerResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No employer profile for this user")
    )
)]
pub async fn get_own_employer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<EmployerResponse>> {
    let employer = state.employer_service.get_by_user(current_user.id).await?;
    Ok(Json(EmployerResponse::from(employer)))
}

/// Search employers by company-name substring
#[utoipa::path(
    get,
    path = "/api/v1/employers/search",
    tag = "Employers",
    security(("bearer_auth" = [])),
    params(EmployerSearchQuery),
    responses(
        (status = 200, description = "Matching employers", body = Vec<EmployerResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_employers(
    State(state): State<AppState>,
    Query(query): Query<EmployerSearchQuery>,
) -> AppResult<Json<Vec<EmployerResponse>>> {
    let employers = state
        .employer_service
        .search_by_company(query.company)
        .await?;
    Ok(Json(
        employers.into_iter().map(EmployerResponse::from).collect(),
    ))
}

/// Get employer by ID
#[utoipa::path(
    get,
    path = "/api/v1/employers/{id}",
    tag = "Employers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employer ID")
    ),
    responses(
        (status = 200, description = "Employer profile", body = EmployerResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employer not found")
    )
)]
pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployerResponse>> {
    let employer = state.employer_service.get_employer(id).await?;
    Ok(Json(EmployerResponse::from(employer)))
}

/// Create an employer profile (employer role; admins may target any user)
#[utoipa::path(
    post,
    path = "/api/v1/employers",
    tag = "Employers",
    security(("bearer_auth" = [])),
    request_body = CreateEmployerRequest,
    responses(
        (status = 201, description = "Employer created", body = EmployerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Employer profile already exists")
    )
)]
pub async fn create_employer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployerRequest>,
) -> AppResult<(StatusCode, Json<EmployerResponse>)> {
    require_role(&current_user, UserRole::Employer)?;

    let user_id = match payload.user_id {
        Some(target) if target != current_user.id => {
            // Creating a profile for someone else is an admin operation
            if !current_user.is_admin() {
                return Err(AppError::Forbidden);
            }
            target
        }
        _ => current_user.id,
    };

    let employer = state
        .employer_service
        .create_employer(NewEmployer {
            user_id,
            company_name: payload.company_name,
            contact_info: payload.contact_info,
            position: payload.position,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EmployerResponse::from(employer))))
}

/// Update an employer profile (owner or admin)
#[utoipa::path(
    put,
    path = "/api/v1/employers/{id}",
    tag = "Employers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employer ID")
    ),
    request_body = UpdateEmployerRequest,
    responses(
        (status = 200, description = "Employer updated", body = EmployerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Employer not found")
    )
)]
pub async fn update_employer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployerRequest>,
) -> AppResult<Json<EmployerResponse>> {
    load_owned(&state, &current_user, id).await?;

    let employer = state
        .employer_service
        .update_employer(
            id,
            EmployerUpdate {
                company_name: payload.company_name,
                contact_info: payload.contact_info,
                position: payload.position,
            },
        )
        .await?;

    Ok(Json(EmployerResponse::from(employer)))
}

/// Delete an employer profile (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/employers/{id}",
    tag = "Employers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employer ID")
    ),
    responses(
        (status = 204, description = "Employer deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Employer not found"),
        (status = 409, description = "Employer has job postings")
    )
)]
pub async fn delete_employer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    load_owned(&state, &current_user, id).await?;

    state.employer_service.delete_employer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
