//! Job seeker domain entity: the candidate profile attached to a user.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Job seeker profile entity
#[derive(Debug, Clone, Serialize)]
pub struct JobSeeker {
    pub id: Uuid,
    pub user_id: Uuid,
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to persist a new job seeker profile
#[derive(Debug, Clone)]
pub struct NewJobSeeker {
    pub user_id: Uuid,
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    pub experience_years: Option<i32>,
}

/// Full-replace update of a job seeker's mutable fields
#[derive(Debug, Clone)]
pub struct JobSeekerUpdate {
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    pub experience_years: Option<i32>,
}

/// Job seeker response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JobSeekerResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub education_details: Option<String>,
    #[schema(example = "Rust, SQL, Docker")]
    pub skills: Option<String>,
    pub college: Option<String>,
    #[schema(example = "open_to_work")]
    pub work_status: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<JobSeeker> for JobSeekerResponse {
    fn from(js: JobSeeker) -> Self {
        Self {
            id: js.id,
            user_id: js.user_id,
            education_details: js.education_details,
            skills: js.skills,
            college: js.college,
            work_status: js.work_status,
            experience_years: js.experience_years,
            created_at: js.created_at,
        }
    }
}
