//! Application domain entity: a job seeker applying to a job with a resume.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Application entity.
///
/// `status` is free text; the conventional cycle is
/// Applied -> Shortlisted/Reviewed -> Interview -> Accepted/Rejected,
/// but any value can be written through update.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub job_seeker_id: Uuid,
    pub resume_id: i32,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_shortlisted: bool,
    pub interview_date: Option<DateTime<Utc>>,
    pub employer_feedback: Option<String>,
}

/// Data required to persist a new application
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i32,
    pub job_seeker_id: Uuid,
    pub resume_id: i32,
    pub cover_letter: Option<String>,
}

/// Full-replace update of an application's mutable fields
#[derive(Debug, Clone)]
pub struct ApplicationUpdate {
    pub cover_letter: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub employer_feedback: Option<String>,
}

/// Application response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationResponse {
    pub id: i32,
    pub job_id: i32,
    pub job_seeker_id: Uuid,
    pub resume_id: i32,
    pub cover_letter: Option<String>,
    #[schema(example = "Applied")]
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_shortlisted: bool,
    pub interview_date: Option<DateTime<Utc>>,
    pub employer_feedback: Option<String>,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            job_id: a.job_id,
            job_seeker_id: a.job_seeker_id,
            resume_id: a.resume_id,
            cover_letter: a.cover_letter,
            status: a.status,
            applied_at: a.applied_at,
            reviewed_at: a.reviewed_at,
            notes: a.notes,
            is_shortlisted: a.is_shortlisted,
            interview_date: a.interview_date,
            employer_feedback: a.employer_feedback,
        }
    }
}
