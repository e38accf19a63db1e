use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Skills {
    Table,
    ProficiencyLevel,
    IsFeatured,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    IsFeatured,
    IsPublished,
    StartDate,
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    IsCurrent,
    StartDate,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    IsCurrent,
    EndDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Skill listing order and the featured filter used by the summary
        manager
            .create_index(
                Index::create()
                    .name("idx_skills_featured_proficiency")
                    .table(Skills::Table)
                    .col(Skills::IsFeatured)
                    .col(Skills::ProficiencyLevel)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_published_featured_start")
                    .table(Projects::Table)
                    .col(Projects::IsPublished)
                    .col(Projects::IsFeatured)
                    .col(Projects::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_experience_current_start")
                    .table(Experience::Table)
                    .col(Experience::IsCurrent)
                    .col(Experience::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_education_current_end")
                    .table(Education::Table)
                    .col(Education::IsCurrent)
                    .col(Education::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_skills_featured_proficiency")
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_projects_published_featured_start")
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_experience_current_start")
                    .table(Experience::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_education_current_end")
                    .table(Education::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
