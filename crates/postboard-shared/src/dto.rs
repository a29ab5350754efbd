//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query string of the post listing endpoint. Missing values take server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub hash_tags: Vec<String>,
}

/// Request to replace a post's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyPostRequest {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request to attach one tag to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTagRequest {
    pub tag_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_optional_fields() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"author":"kim","title":"Hi"}"#).unwrap();
        assert!(req.content.is_empty());
        assert!(req.hash_tags.is_empty());
    }

    #[test]
    fn create_request_reads_camel_case_tags() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"author":"kim","title":"Hi","hashTags":["a","b"]}"#)
                .unwrap();
        assert_eq!(req.hash_tags, ["a", "b"]);
    }
}
