//! Write-side inputs and their validation rules.
//!
//! Every check runs before any storage access and all violations are reported
//! together.

use crate::error::{DomainError, FieldViolation};

pub const AUTHOR_MIN_CHARS: usize = 2;
pub const AUTHOR_MAX_CHARS: usize = 20;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 10_000;
pub const TAG_MAX_CHARS: usize = 30;

/// Data needed to create a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Replacement title and content for an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostRevision {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();
        check_author(&self.author, &mut violations);
        check_title(&self.title, &mut violations);
        check_content(&self.content, &mut violations);
        for tag in &self.tags {
            check_tag("hashTags", tag, &mut violations);
        }
        finish(violations)
    }
}

impl PostRevision {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();
        check_title(&self.title, &mut violations);
        check_content(&self.content, &mut violations);
        finish(violations)
    }
}

pub fn validate_tag_name(name: &str) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_tag("tagName", name, &mut violations);
    finish(violations)
}

fn check_author(author: &str, out: &mut Vec<FieldViolation>) {
    let len = author.trim().chars().count();
    if len == 0 {
        out.push(FieldViolation::new("author", "must not be blank"));
    } else if !(AUTHOR_MIN_CHARS..=AUTHOR_MAX_CHARS).contains(&len) {
        out.push(FieldViolation::new(
            "author",
            format!("must be between {AUTHOR_MIN_CHARS} and {AUTHOR_MAX_CHARS} characters"),
        ));
    }
}

fn check_title(title: &str, out: &mut Vec<FieldViolation>) {
    let len = title.trim().chars().count();
    if len == 0 {
        out.push(FieldViolation::new("title", "must not be blank"));
    } else if len > TITLE_MAX_CHARS {
        out.push(FieldViolation::new(
            "title",
            format!("must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }
}

fn check_content(content: &str, out: &mut Vec<FieldViolation>) {
    if content.chars().count() > CONTENT_MAX_CHARS {
        out.push(FieldViolation::new(
            "content",
            format!("must be at most {CONTENT_MAX_CHARS} characters"),
        ));
    }
}

fn check_tag(field: &'static str, tag: &str, out: &mut Vec<FieldViolation>) {
    let len = tag.trim().chars().count();
    if len == 0 {
        out.push(FieldViolation::new(field, "tag must not be blank"));
    } else if len > TAG_MAX_CHARS {
        out.push(FieldViolation::new(
            field,
            format!("tag '{tag}' must be at most {TAG_MAX_CHARS} characters"),
        ));
    }
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), DomainError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::ValidationFailed(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewPost {
        NewPost {
            author: "choi".into(),
            title: "Weekend notes".into(),
            content: String::new(),
            tags: vec!["diary".into()],
        }
    }

    #[test]
    fn accepts_well_formed_post() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let input = NewPost {
            author: "x".into(),
            title: "   ".into(),
            tags: vec!["ok".into(), " ".into()],
            ..valid()
        };

        let Err(DomainError::ValidationFailed(violations)) = input.validate() else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, ["author", "title", "hashTags"]);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let input = NewPost {
            author: "홍길동".into(),
            ..valid()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn revision_requires_title() {
        let revision = PostRevision {
            title: String::new(),
            content: "body".into(),
        };
        assert!(matches!(
            revision.validate(),
            Err(DomainError::ValidationFailed(_))
        ));
    }

    #[test]
    fn tag_name_length_is_bounded() {
        assert!(validate_tag_name("rust").is_ok());
        assert!(validate_tag_name(&"x".repeat(TAG_MAX_CHARS + 1)).is_err());
    }
}
