//! Employer domain entity: the company profile attached to a user.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Employer profile entity
#[derive(Debug, Clone, Serialize)]
pub struct Employer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub contact_info: Option<String>,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to persist a new employer profile
#[derive(Debug, Clone)]
pub struct NewEmployer {
    pub user_id: Uuid,
    pub company_name: String,
    pub contact_info: Option<String>,
    pub position: Option<String>,
}

/// Full-replace update of an employer's mutable fields
#[derive(Debug, Clone)]
pub struct EmployerUpdate {
    pub company_name: String,
    pub contact_info: Option<String>,
    pub position: Option<String>,
}

/// Employer response shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployerResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    pub contact_info: Option<String>,
    #[schema(example = "Hiring Manager")]
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Employer> for EmployerResponse {
    fn from(e: Employer) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            company_name: e.company_name,
            contact_info: e.contact_info,
            position: e.position,
            created_at: e.created_at,
        }
    }
}
