use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    IsCurrent,
    Gpa,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Education::FieldOfStudy)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::StartDate).date().not_null())
                    .col(ColumnDef::new(Education::EndDate).date().null())
                    .col(
                        ColumnDef::new(Education::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Education::Gpa).double().null())
                    .col(ColumnDef::new(Education::Location).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}
