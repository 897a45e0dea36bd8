//! Job posting domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Job posting entity.
///
/// `status` is intentionally free text: the conventional values are
/// "Open" and "Closed", but no transition rules are enforced.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i32,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to persist a new job posting
#[derive(Debug, Clone)]
pub struct NewJob {
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
}

/// Full-replace update of a job's mutable fields
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    pub status: String,
}

/// Job response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: i32,
    pub employer_id: Uuid,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    pub description: String,
    #[schema(example = "Berlin")]
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    #[schema(example = "Open")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            employer_id: job.employer_id,
            title: job.title,
            description: job.description,
            location: job.location,
            salary: job.salary,
            skills_required: job.skills_required,
            eligibility: job.eligibility,
            status: job.status,
            created_at: job.created_at,
        }
    }
}
