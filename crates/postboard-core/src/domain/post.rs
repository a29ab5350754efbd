use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::HashTag;

/// Post entity - an article with an ordered set of hash tags.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    id: Uuid,
    author: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<HashTag>,
}

impl Post {
    /// Create a new post with no tags.
    pub fn new(author: String, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
        }
    }

    /// Rebuild a post from stored values.
    ///
    /// Tags are `(id, name)` pairs in insertion order. Every tag is bound to
    /// `id`, and a repeated tag id keeps only its first occurrence.
    pub fn restore(
        id: Uuid,
        author: String,
        title: String,
        content: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        tags: impl IntoIterator<Item = (Uuid, String)>,
    ) -> Self {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .filter(|(tag_id, _)| seen.insert(*tag_id))
            .map(|(tag_id, name)| HashTag::new(tag_id, name, id))
            .collect();

        Self {
            id,
            author,
            title,
            content,
            created_at,
            updated_at: updated_at.max(created_at),
            tags,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Owned tags in the order they were attached.
    pub fn tags(&self) -> &[HashTag] {
        &self.tags
    }

    pub fn tag(&self, tag_id: Uuid) -> Option<&HashTag> {
        self.tags.iter().find(|t| t.id() == tag_id)
    }

    /// Replace title and content.
    pub fn revise(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.touch();
    }

    /// Attach a new tag. The tag is appended and bound to this post in one step.
    pub fn add_tag(&mut self, name: impl Into<String>) -> &HashTag {
        let mut tag_id = Uuid::new_v4();
        while self.tag(tag_id).is_some() {
            tag_id = Uuid::new_v4();
        }

        self.tags.push(HashTag::new(tag_id, name.into(), self.id));
        self.touch();
        &self.tags[self.tags.len() - 1]
    }

    /// Detach a tag, returning it if this post owned it.
    pub fn remove_tag(&mut self, tag_id: Uuid) -> Option<HashTag> {
        let index = self.tags.iter().position(|t| t.id() == tag_id)?;
        let removed = self.tags.remove(index);
        self.touch();
        Some(removed)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}
