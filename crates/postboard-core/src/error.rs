//! Domain-level error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single field that failed input validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Validation failed: {}", join_violations(.0))]
    ValidationFailed(Vec<FieldViolation>),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }

    pub fn tag_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "HashTag",
            id,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Storage failures never carry entity context, so a bare `NotFound` from the
/// repository keeps a nil id. Callers that know the id build the error themselves.
impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id: Uuid::nil(),
            },
            other => DomainError::StorageUnavailable(other.to_string()),
        }
    }
}
