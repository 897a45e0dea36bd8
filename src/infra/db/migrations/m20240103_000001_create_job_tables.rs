//! Migration: Create the jobs, resumes, and applications tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Jobs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Jobs::EmployerId).uuid().not_null())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::Location).string().not_null())
                    .col(ColumnDef::new(Jobs::Salary).big_integer().null())
                    .col(ColumnDef::new(Jobs::SkillsRequired).text().null())
                    .col(ColumnDef::new(Jobs::Eligibility).text().null())
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .string()
                            .not_null()
                            .default("Open"),
                    )
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_employer_id")
                            .from(Jobs::Table, Jobs::EmployerId)
                            .to(Employers::Table, Employers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_employer_id")
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_status")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resumes::JobSeekerId).uuid().not_null())
                    .col(ColumnDef::new(Resumes::ResumeName).string().not_null())
                    .col(ColumnDef::new(Resumes::FilePath).string().not_null())
                    .col(ColumnDef::new(Resumes::FileType).string().null())
                    .col(ColumnDef::new(Resumes::ParsedSkills).text().null())
                    .col(
                        ColumnDef::new(Resumes::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Resumes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Resumes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resumes_job_seeker_id")
                            .from(Resumes::Table, Resumes::JobSeekerId)
                            .to(JobSeekers::Table, JobSeekers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resumes_job_seeker_id")
                    .table(Resumes::Table)
                    .col(Resumes::JobSeekerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::JobId).integer().not_null())
                    .col(ColumnDef::new(Applications::JobSeekerId).uuid().not_null())
                    .col(ColumnDef::new(Applications::ResumeId).integer().not_null())
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string()
                            .not_null()
                            .default("Applied"),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::ReviewedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Applications::Notes).text().null())
                    .col(
                        ColumnDef::new(Applications::IsShortlisted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Applications::InterviewDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Applications::EmployerFeedback).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job_id")
                            .from(Applications::Table, Applications::JobId)
                            .to(Jobs::Table, Jobs::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job_seeker_id")
                            .from(Applications::Table, Applications::JobSeekerId)
                            .to(JobSeekers::Table, JobSeekers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_resume_id")
                            .from(Applications::Table, Applications::ResumeId)
                            .to(Resumes::Table, Resumes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_job_id")
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_job_seeker_id")
                    .table(Applications::Table)
                    .col(Applications::JobSeekerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_status")
                    .table(Applications::Table)
                    .col(Applications::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employers {
    Table,
    Id,
}

#[derive(Iden)]
enum JobSeekers {
    Table,
    Id,
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
    Location,
    Salary,
    SkillsRequired,
    Eligibility,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Resumes {
    Table,
    Id,
    JobSeekerId,
    ResumeName,
    FilePath,
    FileType,
    ParsedSkills,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    JobId,
    JobSeekerId,
    ResumeId,
    CoverLetter,
    Status,
    AppliedAt,
    ReviewedAt,
    Notes,
    IsShortlisted,
    InterviewDate,
    EmployerFeedback,
}
