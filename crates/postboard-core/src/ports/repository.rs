use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// A slice of posts together with the size of the whole collection,
/// read from the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_count: u64,
}

/// Post repository.
///
/// `save` stores the post together with its full tag list, replacing
/// whatever tags were stored before. `delete` removes the tags as well.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Posts ordered by `created_at` descending, ties broken by id descending.
    async fn find_page(&self, offset: u64, limit: u64) -> Result<PostPage, RepoError>;

    /// The post owning the given tag.
    async fn find_tag_owner(&self, tag_id: Uuid) -> Result<Option<Post>, RepoError>;
}
