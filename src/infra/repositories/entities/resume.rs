//! SeaORM entity for the resumes table.

use sea_orm::entity::prelude::*;

use crate::domain::Resume;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_seeker_id: Uuid,
    pub resume_name: String,
    pub file_path: String,
    pub file_type: Option<String>,
    pub parsed_skills: Option<String>,
    pub is_default: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_seeker::Entity",
        from = "Column::JobSeekerId",
        to = "super::job_seeker::Column::Id"
    )]
    JobSeeker,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::job_seeker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobSeeker.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Resume {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            job_seeker_id: model.job_seeker_id,
            resume_name: model.resume_name,
            file_path: model.file_path,
            file_type: model.file_type,
            parsed_skills: model.parsed_skills,
            is_default: model.is_default,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
