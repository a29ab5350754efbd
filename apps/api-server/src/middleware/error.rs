//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::DomainError;
use postboard_shared::{ErrorResponse, FieldErrorDetail};
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<FieldErrorDetail>),
    StorageUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(errors) => {
                for err in errors {
                    tracing::warn!(field = %err.field, "Invalid client data: {}", err.message);
                }
                ErrorResponse::validation_failed(errors.clone())
            }
            AppError::StorageUnavailable(detail) => {
                // Detail stays in the logs only
                tracing::error!("Storage unavailable: {}", detail);
                ErrorResponse::service_unavailable()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPageRequest(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::ValidationFailed(violations) => AppError::Validation(
                violations
                    .into_iter()
                    .map(|v| FieldErrorDetail {
                        field: v.field.to_string(),
                        message: v.message,
                    })
                    .collect(),
            ),
            DomainError::StorageUnavailable(msg) => AppError::StorageUnavailable(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
