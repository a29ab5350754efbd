//! Caller-facing shapes built from domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{HashTag, Post};
use crate::pagination::PageInfo;

/// Flat view of a post with its tags reduced to their names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl From<&Post> for PostDetail {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            author: post.author().to_string(),
            created_at: post.created_at(),
            modified_at: post.updated_at(),
            tags: post.tags().iter().map(HashTag::name).map(String::from).collect(),
        }
    }
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

/// A tag with its identifier and owner, for tag-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDetail {
    pub id: Uuid,
    pub name: String,
    pub post_id: Uuid,
}

impl From<&HashTag> for TagDetail {
    fn from(tag: &HashTag) -> Self {
        Self {
            id: tag.id(),
            name: tag.name().to_string(),
            post_id: tag.post_id(),
        }
    }
}

/// One page of projected posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    /// Number of posts in this page, not the total.
    pub count: usize,
    pub posts: Vec<PostDetail>,
    pub page_info: PageInfo,
}
