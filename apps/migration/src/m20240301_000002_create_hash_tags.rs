use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240301_000001_create_posts::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HashTags::Table)
                    .if_not_exists()
                    .col(uuid(HashTags::Id).primary_key())
                    .col(uuid(HashTags::PostId).not_null())
                    .col(string_len(HashTags::TagName, 30).not_null())
                    .col(integer(HashTags::Position).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hash_tags_post")
                            .from(HashTags::Table, HashTags::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hash_tags_post")
                    .table(HashTags::Table)
                    .col(HashTags::PostId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HashTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HashTags {
    Table,
    Id,
    PostId,
    TagName,
    Position,
}
