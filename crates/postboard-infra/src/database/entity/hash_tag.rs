//! HashTag entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use postboard_core::domain::Post;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hash_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub tag_name: String,
    /// Insertion order within the owning post.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Active models for every tag of a post, numbered in attach order.
pub fn active_models(post: &Post) -> Vec<ActiveModel> {
    post.tags()
        .iter()
        .enumerate()
        .map(|(position, tag)| ActiveModel {
            id: Set(tag.id()),
            post_id: Set(tag.post_id()),
            tag_name: Set(tag.name().to_string()),
            position: Set(position as i32),
        })
        .collect()
}
