//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostService;
use postboard_core::ports::PostRepository;
use postboard_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postboard_infra::PostgresPostRepository;

use crate::config::{AppConfig, PagingConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub paging: PagingConfig,
    /// Name of the storage backend in use, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (repo, storage) = build_repository(config.database.as_ref()).await;
        tracing::info!(storage, "Application state initialized");
        Self::with_repository(repo, storage, config.paging)
    }

    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        storage: &'static str,
        paging: PagingConfig,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo, paging.listing_settings())),
            paging,
            storage,
        }
    }
}

#[cfg(feature = "postgres")]
async fn build_repository(
    db_config: Option<&DatabaseConfig>,
) -> (Arc<dyn PostRepository>, &'static str) {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return (Arc::new(InMemoryPostRepository::new()), "memory");
    };

    match postboard_infra::database::connect(config).await {
        Ok(conn) => (Arc::new(PostgresPostRepository::new(conn)), "postgres"),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            (Arc::new(InMemoryPostRepository::new()), "memory")
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_repository(
    _db_config: Option<&DatabaseConfig>,
) -> (Arc<dyn PostRepository>, &'static str) {
    tracing::info!("Running without postgres feature - using in-memory repository");
    (Arc::new(InMemoryPostRepository::new()), "memory")
}
