//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_EMPLOYER, ROLE_JOB_SEEKER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Employer,
    JobSeeker,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a route requiring `required`.
    /// Admins can access everything.
    pub fn can_access(&self, required: &UserRole) -> bool {
        self == required || self.is_admin()
    }

    /// Parse a stored role string, rejecting unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_ADMIN => Some(UserRole::Admin),
            ROLE_EMPLOYER => Some(UserRole::Employer),
            ROLE_JOB_SEEKER => Some(UserRole::JobSeeker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Employer => ROLE_EMPLOYER,
            UserRole::JobSeeker => ROLE_JOB_SEEKER,
        }
    }
}

impl From<&str> for UserRole {
    /// Stored role strings are written by this application, so unknown
    /// values only appear after manual tampering; default to the least
    /// privileged role.
    fn from(s: &str) -> Self {
        UserRole::parse(s).unwrap_or(UserRole::JobSeeker)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    /// Deactivated accounts cannot log in and are hidden from non-admin listings
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to persist a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

/// Registration input accepted by the auth service
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

/// Full-replace update of a user's mutable profile fields
#[derive(Debug, Clone)]
pub struct UserProfileUpdate {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    /// Role change, admin only; validated at the handler
    pub role: Option<UserRole>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User role
    #[schema(example = "job_seeker")]
    pub role: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub deactivated_at: Option<DateTime<Utc>>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            address: user.address,
            is_active: user.is_active,
            deactivated_at: user.deactivated_at,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Admin, UserRole::Employer, UserRole::JobSeeker] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(UserRole::parse("root"), None);
    }

    #[test]
    fn test_admin_can_access_everything() {
        assert!(UserRole::Admin.can_access(&UserRole::Employer));
        assert!(UserRole::Admin.can_access(&UserRole::JobSeeker));
        assert!(!UserRole::JobSeeker.can_access(&UserRole::Employer));
        assert!(UserRole::Employer.can_access(&UserRole::Employer));
    }

    #[test]
    fn test_response_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            role: UserRole::JobSeeker,
            date_of_birth: None,
            gender: None,
            address: None,
            is_active: true,
            deactivated_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(!serialized.contains("secret-hash"));
    }
}
