//! SeaORM entity for the jobs table.

use sea_orm::entity::prelude::*;

use crate::domain::Job;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub skills_required: Option<String>,
    pub eligibility: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employer::Entity",
        from = "Column::EmployerId",
        to = "super::employer::Column::Id"
    )]
    Employer,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::employer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Job {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            employer_id: model.employer_id,
            title: model.title,
            description: model.description,
            location: model.location,
            salary: model.salary,
            skills_required: model.skills_required,
            eligibility: model.eligibility,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
