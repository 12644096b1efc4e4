use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(pk_auto(Blogs::Id))
                    .col(text_null(Blogs::Image))
                    .col(string_len(Blogs::Heading, 200))
                    .col(string_len_null(Blogs::SubHeading, 200))
                    .col(text(Blogs::Description))
                    .col(string_len(Blogs::Author, 100).default("Current User"))
                    .col(text(Blogs::AuthorImage))
                    .col(boolean(Blogs::IsFavorite).default(false))
                    .col(timestamp_with_time_zone(Blogs::CreatedAt))
                    .col(timestamp_with_time_zone(Blogs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Backs the favorites listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_is_favorite_created_at")
                    .table(Blogs::Table)
                    .col(Blogs::IsFavorite)
                    .col(Blogs::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Image,
    Heading,
    SubHeading,
    Description,
    Author,
    AuthorImage,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}
