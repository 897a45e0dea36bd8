//! Migration: Create the employers and job_seekers profile tables.
//!
//! `user_id` is indexed but deliberately not unique: the one-profile-per-user
//! rule is a soft guard enforced by the services, not the schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employers::UserId).uuid().not_null())
                    .col(ColumnDef::new(Employers::CompanyName).string().not_null())
                    .col(ColumnDef::new(Employers::ContactInfo).string().null())
                    .col(ColumnDef::new(Employers::Position).string().null())
                    .col(
                        ColumnDef::new(Employers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employers_user_id")
                            .from(Employers::Table, Employers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employers_user_id")
                    .table(Employers::Table)
                    .col(Employers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobSeekers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobSeekers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobSeekers::UserId).uuid().not_null())
                    .col(ColumnDef::new(JobSeekers::EducationDetails).text().null())
                    .col(ColumnDef::new(JobSeekers::Skills).text().null())
                    .col(ColumnDef::new(JobSeekers::College).string().null())
                    .col(ColumnDef::new(JobSeekers::WorkStatus).string().null())
                    .col(ColumnDef::new(JobSeekers::ExperienceYears).integer().null())
                    .col(
                        ColumnDef::new(JobSeekers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_seekers_user_id")
                            .from(JobSeekers::Table, JobSeekers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_seekers_user_id")
                    .table(JobSeekers::Table)
                    .col(JobSeekers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobSeekers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Employers {
    Table,
    Id,
    UserId,
    CompanyName,
    ContactInfo,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum JobSeekers {
    Table,
    Id,
    UserId,
    EducationDetails,
    Skills,
    College,
    WorkStatus,
    ExperienceYears,
    CreatedAt,
    UpdatedAt,
}
