use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Company,
    Position,
    Description,
    StartDate,
    EndDate,
    IsCurrent,
    Location,
    CompanyUrl,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experience::Company).string_len(200).not_null())
                    .col(ColumnDef::new(Experience::Position).string_len(200).not_null())
                    .col(ColumnDef::new(Experience::Description).text().not_null())
                    .col(ColumnDef::new(Experience::StartDate).date().not_null())
                    .col(ColumnDef::new(Experience::EndDate).date().null())
                    .col(
                        ColumnDef::new(Experience::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experience::Location).string_len(200).not_null())
                    .col(ColumnDef::new(Experience::CompanyUrl).string().null())
                    .col(
                        ColumnDef::new(Experience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experience::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}
