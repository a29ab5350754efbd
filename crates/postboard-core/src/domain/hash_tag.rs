use serde::Serialize;
use uuid::Uuid;

/// HashTag entity - a label owned by exactly one post.
///
/// The owner is held as an identifier, never as a reference. Tags are only
/// created through [`Post::add_tag`](super::Post::add_tag) or when a post is
/// restored from storage, so `post_id` always matches the owning post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashTag {
    id: Uuid,
    name: String,
    post_id: Uuid,
}

impl HashTag {
    pub(super) fn new(id: Uuid, name: String, post_id: Uuid) -> Self {
        Self { id, name, post_id }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the owning post.
    pub fn post_id(&self) -> Uuid {
        self.post_id
    }
}
