//! Resume domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Resume entity. At most one resume per job seeker carries
/// `is_default = true`; the flag is rewritten by the set-default
/// operation.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub id: i32,
    pub job_seeker_id: Uuid,
    pub resume_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to persist a new resume
#[derive(Debug, Clone)]
pub struct NewResume {
    pub job_seeker_id: Uuid,
    pub resume_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
}

/// Full-replace update of a resume's mutable fields
#[derive(Debug, Clone)]
pub struct ResumeUpdate {
    pub resume_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
}

/// Resume response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResumeResponse {
    pub id: i32,
    pub job_seeker_id: Uuid,
    #[schema(example = "backend-2024.pdf")]
    pub resume_name: String,
    pub file_path: String,
    #[schema(example = "application/pdf")]
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
    pub is_default: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Resume> for ResumeResponse {
    fn from(r: Resume) -> Self {
        Self {
            id: r.id,
            job_seeker_id: r.job_seeker_id,
            resume_name: r.resume_name,
            file_path: r.file_path,
            file_type: r.file_type,
            parsed_skills: r.parsed_skills,
            is_default: r.is_default,
            updated_at: r.updated_at,
        }
    }
}
