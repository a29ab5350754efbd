use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(uuid(Posts::Id).primary_key())
                    .col(string_len(Posts::Author, 20).not_null())
                    .col(string_len(Posts::Title, 100).not_null())
                    .col(text(Posts::Content).not_null())
                    .col(timestamp_with_time_zone(Posts::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Posts::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Listing order: newest first, id as tie-break.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at_id")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .col(Posts::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Posts {
    Table,
    Id,
    Author,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}
