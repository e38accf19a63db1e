use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `contact` table and its columns.
#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    Email,
    Phone,
    Location,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
    WebsiteUrl,
    ResumeUrl,
    CreatedAt,
    UpdatedAt,
}

/// Identifiers for the `about` table and its columns.
#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Name,
    Title,
    Bio,
    ProfileImage,
    ResumeFile,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contact::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Contact::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Contact::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Contact::Location).string_len(200).not_null())
                    .col(ColumnDef::new(Contact::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Contact::GithubUrl).string().null())
                    .col(ColumnDef::new(Contact::TwitterUrl).string().null())
                    .col(ColumnDef::new(Contact::WebsiteUrl).string().null())
                    .col(ColumnDef::new(Contact::ResumeUrl).string().null())
                    .col(
                        ColumnDef::new(Contact::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contact::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(About::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(About::Name).string_len(200).not_null())
                    .col(ColumnDef::new(About::Title).string_len(200).not_null())
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::ProfileImage).string().null())
                    .col(ColumnDef::new(About::ResumeFile).string().null())
                    .col(
                        ColumnDef::new(About::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(About::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}
