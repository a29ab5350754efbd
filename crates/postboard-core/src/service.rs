//! Post service - listing, projection and single-post operations.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::command::{NewPost, PostRevision, validate_tag_name};
use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::pagination::{DEFAULT_PAGE_WINDOW, PageInfo, PageRequest};
use crate::ports::PostRepository;
use crate::projection::{ListingResponse, PostDetail, TagDetail};

/// Knobs for listing output.
#[derive(Debug, Clone, Copy)]
pub struct ListingSettings {
    /// Number of page links in one page-picker block.
    pub page_window: u64,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_window: DEFAULT_PAGE_WINDOW,
        }
    }
}

/// Application service over a [`PostRepository`].
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    settings: ListingSettings,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, settings: ListingSettings) -> Self {
        Self { repo, settings }
    }

    /// One page of posts, newest first.
    #[instrument(skip(self), fields(page = request.page, size = request.size))]
    pub async fn list(&self, request: PageRequest) -> Result<ListingResponse, DomainError> {
        let window = request.normalize()?;

        let page = self.repo.find_page(window.offset, window.limit).await?;
        let posts: Vec<PostDetail> = page.posts.iter().map(PostDetail::from).collect();

        tracing::debug!(
            returned = posts.len(),
            total = page.total_count,
            "Listed posts"
        );

        Ok(ListingResponse {
            count: posts.len(),
            page_info: PageInfo::with_window(
                page.total_count,
                window.limit,
                request.page as u64,
                self.settings.page_window,
            ),
            posts,
        })
    }

    #[instrument(skip(self))]
    pub async fn detail(&self, id: Uuid) -> Result<PostDetail, DomainError> {
        self.load(id).await.map(PostDetail::from)
    }

    #[instrument(skip(self, input), fields(author = %input.author))]
    pub async fn create(&self, input: NewPost) -> Result<PostDetail, DomainError> {
        input.validate()?;

        let mut post = Post::new(
            input.author.trim().to_string(),
            input.title.trim().to_string(),
            input.content,
        );
        for tag in input.tags {
            post.add_tag(tag.trim());
        }

        let saved = self.repo.save(post).await?;
        tracing::info!(post_id = %saved.id(), tags = saved.tags().len(), "Post created");
        Ok(saved.into())
    }

    #[instrument(skip(self, revision))]
    pub async fn modify(&self, id: Uuid, revision: PostRevision) -> Result<PostDetail, DomainError> {
        revision.validate()?;

        let mut post = self.load(id).await?;
        post.revise(revision.title.trim().to_string(), revision.content);

        let saved = self.repo.save(post).await?;
        tracing::info!(post_id = %id, "Post modified");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::post_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Tags of a post, with their identifiers, in attach order.
    #[instrument(skip(self))]
    pub async fn tags(&self, post_id: Uuid) -> Result<Vec<TagDetail>, DomainError> {
        let post = self.load(post_id).await?;
        Ok(post.tags().iter().map(TagDetail::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn add_tag(&self, post_id: Uuid, name: String) -> Result<PostDetail, DomainError> {
        validate_tag_name(&name)?;

        let mut post = self.load(post_id).await?;
        post.add_tag(name.trim());

        Ok(self.repo.save(post).await?.into())
    }

    #[instrument(skip(self))]
    pub async fn remove_tag(&self, post_id: Uuid, tag_id: Uuid) -> Result<PostDetail, DomainError> {
        let mut post = self.load(post_id).await?;
        if post.remove_tag(tag_id).is_none() {
            return Err(DomainError::tag_not_found(tag_id));
        }

        Ok(self.repo.save(post).await?.into())
    }

    /// The post a tag belongs to.
    #[instrument(skip(self))]
    pub async fn tag_owner(&self, tag_id: Uuid) -> Result<PostDetail, DomainError> {
        self.repo
            .find_tag_owner(tag_id)
            .await?
            .map(PostDetail::from)
            .ok_or_else(|| DomainError::tag_not_found(tag_id))
    }

    async fn load(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}
