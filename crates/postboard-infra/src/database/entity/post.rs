//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use postboard_core::domain::Post;

use super::hash_tag;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hash_tag::Entity")]
    HashTag,
}

impl Related<super::hash_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HashTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the domain post from its row and its tag rows.
    ///
    /// Tags are sorted by their stored position, so callers may pass them in any order.
    pub fn into_domain(self, mut tags: Vec<hash_tag::Model>) -> Post {
        tags.sort_by_key(|t| t.position);
        Post::restore(
            self.id,
            self.author,
            self.title,
            self.content,
            self.created_at.into(),
            self.updated_at.into(),
            tags.into_iter().map(|t| (t.id, t.tag_name)),
        )
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel. Tags are stored separately.
impl From<&Post> for ActiveModel {
    fn from(post: &Post) -> Self {
        Self {
            id: Set(post.id()),
            author: Set(post.author().to_string()),
            title: Set(post.title().to_string()),
            content: Set(post.content().to_string()),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().into()),
        }
    }
}
