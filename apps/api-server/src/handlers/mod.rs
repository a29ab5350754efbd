//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractor_config::query())
        .app_data(extractor_config::json())
        .app_data(extractor_config::path())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/v1")
                        .service(
                            web::scope("/posts")
                                .route("", web::get().to(posts::list))
                                .route("", web::post().to(posts::create))
                                .route("", web::patch().to(posts::modify))
                                .route("", web::put().to(posts::modify))
                                .route("/{id}", web::get().to(posts::detail))
                                .route("/{id}", web::delete().to(posts::delete))
                                .route("/{id}/tags", web::get().to(posts::list_tags))
                                .route("/{id}/tags", web::post().to(posts::add_tag))
                                .route("/{id}/tags/{tag_id}", web::delete().to(posts::remove_tag)),
                        )
                        .route("/tags/{tag_id}/post", web::get().to(posts::tag_owner)),
                ),
        );
}

/// Extractor failures answer with the same problem documents as handler errors.
mod extractor_config {
    use super::*;

    pub fn query() -> web::QueryConfig {
        web::QueryConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into())
    }

    pub fn json() -> web::JsonConfig {
        web::JsonConfig::default().error_handler(|err, _| match err {
            error::JsonPayloadError::ContentType => {
                AppError::BadRequest("expected an application/json body".to_string()).into()
            }
            other => AppError::BadRequest(other.to_string()).into(),
        })
    }

    pub fn path() -> web::PathConfig {
        web::PathConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into())
    }
}
