//! In-memory post repository - used when no database is configured.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostPage, PostRepository};

/// Posts keyed by id, plus an index from tag id to owning post id.
#[derive(Default)]
struct Arena {
    posts: BTreeMap<Uuid, Post>,
    tag_owners: HashMap<Uuid, Uuid>,
}

impl Arena {
    fn unindex_tags(&mut self, post_id: Uuid) {
        self.tag_owners.retain(|_, owner| *owner != post_id);
    }
}

/// In-memory post repository using an async RwLock over the arena.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    arena: RwLock<Arena>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            arena: RwLock::new(Arena::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let arena = self.arena.read().await;
        Ok(arena.posts.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut arena = self.arena.write().await;

        if let Some(tag) = post.tags().iter().find(|tag| {
            arena
                .tag_owners
                .get(&tag.id())
                .is_some_and(|owner| *owner != post.id())
        }) {
            return Err(RepoError::Constraint(format!(
                "hash tag {} belongs to another post",
                tag.id()
            )));
        }

        arena.unindex_tags(post.id());
        for tag in post.tags() {
            arena.tag_owners.insert(tag.id(), post.id());
        }
        arena.posts.insert(post.id(), post.clone());

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut arena = self.arena.write().await;
        if arena.posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        arena.unindex_tags(id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<PostPage, RepoError> {
        // Count and slice come from the same read guard.
        let arena = self.arena.read().await;

        let mut ordered: Vec<&Post> = arena.posts.values().collect();
        ordered.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        let posts = ordered
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(PostPage {
            posts,
            total_count: arena.posts.len() as u64,
        })
    }

    async fn find_tag_owner(&self, tag_id: Uuid) -> Result<Option<Post>, RepoError> {
        let arena = self.arena.read().await;
        Ok(arena
            .tag_owners
            .get(&tag_id)
            .and_then(|owner| arena.posts.get(owner))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn post_at(title: &str, minutes: i64) -> Post {
        let at = Utc::now() + Duration::minutes(minutes);
        Post::restore(
            Uuid::new_v4(),
            "tester".into(),
            title.into(),
            String::new(),
            at,
            at,
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn find_page_orders_newest_first() {
        let repo = InMemoryPostRepository::new();
        for (title, minutes) in [("old", 0), ("new", 10), ("mid", 5)] {
            repo.save(post_at(title, minutes)).await.unwrap();
        }

        let page = repo.find_page(0, 2).await.unwrap();
        let titles: Vec<_> = page.posts.iter().map(Post::title).collect();
        assert_eq!(titles, ["new", "mid"]);
        assert_eq!(page.total_count, 3);

        let rest = repo.find_page(2, 2).await.unwrap();
        assert_eq!(rest.posts.len(), 1);
        assert_eq!(rest.posts[0].title(), "old");
    }

    #[tokio::test]
    async fn offset_past_the_end_is_empty() {
        let repo = InMemoryPostRepository::new();
        repo.save(post_at("only", 0)).await.unwrap();

        let page = repo.find_page(10, 10).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn tag_owner_follows_saves_and_deletes() {
        let repo = InMemoryPostRepository::new();
        let mut post = post_at("tagged", 0);
        let kept = post.add_tag("kept").id();
        let dropped = post.add_tag("dropped").id();
        repo.save(post.clone()).await.unwrap();

        assert_eq!(
            repo.find_tag_owner(kept).await.unwrap().map(|p| p.id()),
            Some(post.id())
        );

        post.remove_tag(dropped);
        repo.save(post.clone()).await.unwrap();
        assert!(repo.find_tag_owner(dropped).await.unwrap().is_none());

        repo.delete(post.id()).await.unwrap();
        assert!(repo.find_tag_owner(kept).await.unwrap().is_none());
        assert!(repo.find_by_id(post.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn tag_ids_cannot_move_between_posts() {
        let repo = InMemoryPostRepository::new();
        let mut first = post_at("first", 0);
        let tag_id = first.add_tag("shared").id();
        repo.save(first).await.unwrap();

        let second = Post::restore(
            Uuid::new_v4(),
            "tester".into(),
            "second".into(),
            String::new(),
            Utc::now(),
            Utc::now(),
            vec![(tag_id, "shared".to_string())],
        );

        assert!(matches!(
            repo.save(second).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
