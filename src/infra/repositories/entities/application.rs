//! SeaORM entity for the applications table.

use sea_orm::entity::prelude::*;

use crate::domain::Application;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_id: i32,
    pub job_seeker_id: Uuid,
    pub resume_id: i32,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub is_shortlisted: bool,
    pub interview_date: Option<DateTimeUtc>,
    pub employer_feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::job_seeker::Entity",
        from = "Column::JobSeekerId",
        to = "super::job_seeker::Column::Id"
    )]
    JobSeeker,
    #[sea_orm(
        belongs_to = "super::resume::Entity",
        from = "Column::ResumeId",
        to = "super::resume::Column::Id"
    )]
    Resume,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::job_seeker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobSeeker.def()
    }
}

impl Related<super::resume::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resume.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Application {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            job_id: model.job_id,
            job_seeker_id: model.job_seeker_id,
            resume_id: model.resume_id,
            cover_letter: model.cover_letter,
            status: model.status,
            applied_at: model.applied_at,
            reviewed_at: model.reviewed_at,
            notes: model.notes,
            is_shortlisted: model.is_shortlisted,
            interview_date: model.interview_date,
            employer_feedback: model.employer_feedback,
        }
    }
}
