//! Application Configuration
//!
//! Endpoints, limits and log level. Defaults can be overridden at build time through
//! `SHOWCASE_POSTS_URL`, `SHOWCASE_USERS_URL` and `SHOWCASE_LOG_LEVEL`.

use leptos::prelude::*;
use log::LevelFilter;

const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Articles collection
    pub posts_url: String,
    /// Authors collection
    pub users_url: String,
    /// Local storage key holding the task list
    pub tasks_storage_key: String,
    /// Articles kept from the fetched collection
    pub article_limit: usize,
    /// Articles per carousel slide
    pub page_size: usize,
    /// Placeholder cards shown while loading
    pub skeleton_count: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            users_url: DEFAULT_USERS_URL.to_string(),
            tasks_storage_key: "tasks".to_string(),
            article_limit: 12,
            page_size: 6,
            skeleton_count: 6,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("SHOWCASE_POSTS_URL"),
            option_env!("SHOWCASE_USERS_URL"),
            option_env!("SHOWCASE_LOG_LEVEL"),
        )
    }

    fn with_overrides(mut self, posts_url: Option<&str>, users_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = posts_url.filter(|s| !s.trim().is_empty()) {
            self.posts_url = url.trim().to_string();
        }
        if let Some(url) = users_url.filter(|s| !s.trim().is_empty()) {
            self.users_url = url.trim().to_string();
        }
        if let Some(level) = log_level.and_then(|s| s.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.tasks_storage_key, "tasks");
        assert_eq!(config.article_limit, 12);
        assert_eq!(config.page_size, 6);
        assert_eq!(config.skeleton_count, 6);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(
            Some(" http://localhost:8080/posts "),
            Some(""),
            Some("warn"),
        );
        assert_eq!(config.posts_url, "http://localhost:8080/posts");
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_bad_level_is_ignored() {
        let base = AppConfig::default();
        let config = base.clone().with_overrides(None, None, Some("loud"));
        assert_eq!(config.log_level, base.log_level);
    }
}
