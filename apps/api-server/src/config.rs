//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use postboard_core::ListingSettings;
use postboard_infra::DatabaseConfig;

/// Page-size defaults and limits applied at the HTTP boundary.
#[derive(Debug, Clone, Copy)]
pub struct PagingConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub page_window: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            page_window: 5,
        }
    }
}

impl PagingConfig {
    pub fn listing_settings(&self) -> ListingSettings {
        ListingSettings {
            page_window: self.page_window,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub paging: PagingConfig,
    /// Emit JSON log lines instead of pretty output.
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut db = DatabaseConfig::new(url);
                db.max_connections = positive(&lookup, "DB_MAX_CONNECTIONS", db.max_connections);
                db.min_connections = positive(&lookup, "DB_MIN_CONNECTIONS", db.min_connections)
                    .min(db.max_connections);
                db
            });

        let defaults = PagingConfig::default();
        let max_page_size = positive(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size);
        let paging = PagingConfig {
            default_page_size: positive(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)
                .min(max_page_size),
            max_page_size,
            page_window: positive(&lookup, "PAGE_WINDOW", defaults.page_window),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            paging,
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    lookup(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}
