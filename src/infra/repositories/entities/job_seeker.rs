//! SeaORM entity for the job_seekers table.

use sea_orm::entity::prelude::*;

use crate::domain::JobSeeker;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_seekers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub education_details: Option<String>,
    pub skills: Option<String>,
    pub college: Option<String>,
    pub work_status: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::resume::Entity")]
    Resume,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::resume::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resume.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JobSeeker {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            education_details: model.education_details,
            skills: model.skills,
            college: model.college,
            work_status: model.work_status,
            experience_years: model.experience_years,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
