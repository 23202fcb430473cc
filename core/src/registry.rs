//! Cached theme-list accessor.
//!
//! The single entry point UI code calls. Wraps the two retrieval
//! strategies behind one asynchronous accessor with a per-key cache
//! and a freshness window; a stale or missing entry is recomputed on
//! access. The registry is reentrant-safe (no shared mutable state
//! outside the lock) but does not deduplicate concurrent
//! recomputations for the same key; that is left to an outer caching
//! layer when one exists.

use crate::error::{ThemeError, ThemeResult};
use crate::resolver::HttpThemeResolver;
use crate::theme::types::{Theme, ThemeConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub const DEFAULT_API_PATH: &str = "/api/themes";
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Options accepted by [`ThemeRegistry::get_themes`].
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Remote theme-listing endpoint (default `/api/themes`).
    pub api_path: Option<String>,
    /// Freshness window for cached results (default 5 minutes).
    pub stale_time: Option<Duration>,
    /// Scan the stylesheet in-process instead of calling the
    /// endpoint. Useful when no server route exists.
    pub use_parser: bool,
    /// Discovery options for the in-process parser strategy.
    pub parser_options: Option<ThemeConfig>,
}

/// Cache key: one slot per (endpoint-or-mode, parser-flag) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    endpoint: String,
    use_parser: bool,
}

impl RegistryKey {
    fn for_options(options: &RegistryOptions) -> Self {
        Self {
            endpoint: options
                .api_path
                .clone()
                .unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
            use_parser: options.use_parser,
        }
    }
}

struct CachedThemes {
    themes: Vec<Theme>,
    fetched_at: Instant,
    stale_after: Duration,
}

impl CachedThemes {
    fn new(themes: Vec<Theme>, stale_after: Duration) -> Self {
        Self {
            themes,
            fetched_at: Instant::now(),
            stale_after,
        }
    }

    fn is_stale(&self) -> bool {
        self.fetched_at.elapsed() >= self.stale_after
    }
}

/// Wire shape of the theme-listing endpoint body.
#[derive(Debug, Deserialize)]
struct ThemesResponse {
    themes: Vec<Theme>,
}

/// Cached accessor over the theme-listing endpoint and the in-process
/// parser path.
#[derive(Clone)]
pub struct ThemeRegistry {
    base_url: String,
    http_client: reqwest::Client,
    cache: Arc<RwLock<HashMap<RegistryKey, CachedThemes>>>,
}

impl ThemeRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client: reqwest::Client::new(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the theme list for `options`, serving a fresh cached
    /// result when one exists and recomputing otherwise.
    ///
    /// The endpoint strategy surfaces transport and decoding errors;
    /// the parser strategy never fails (resolver fallback contract).
    /// Failed recomputations are not cached.
    pub async fn get_themes(&self, options: &RegistryOptions) -> ThemeResult<Vec<Theme>> {
        let key = RegistryKey::for_options(options);

        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(&key) {
                if !entry.is_stale() {
                    return Ok(entry.themes.clone());
                }
            }
        }

        let themes = if options.use_parser {
            let resolver =
                HttpThemeResolver::with_client(&self.base_url, self.http_client.clone());
            let config = options.parser_options.clone().unwrap_or_default();
            resolver.resolve_themes(&config).await
        } else {
            self.fetch_from_api(&key.endpoint).await?
        };

        let stale_after = options.stale_time.unwrap_or(DEFAULT_STALE_TIME);
        let mut cache = self.cache.write().await;
        cache.insert(key, CachedThemes::new(themes.clone(), stale_after));

        Ok(themes)
    }

    /// Drops the cached entry for `options`, forcing the next access
    /// to recompute.
    pub async fn invalidate(&self, options: &RegistryOptions) {
        let mut cache = self.cache.write().await;
        cache.remove(&RegistryKey::for_options(options));
    }

    /// Drops every cached entry.
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    async fn fetch_from_api(&self, api_path: &str) -> ThemeResult<Vec<Theme>> {
        let url = if api_path.starts_with("http://") || api_path.starts_with("https://") {
            api_path.to_string()
        } else {
            format!("{}/{}", self.base_url, api_path.trim_start_matches('/'))
        };

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ThemeError::fetch(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThemeError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body: ThemesResponse = response
            .json()
            .await
            .map_err(|e| ThemeError::InvalidResponse(e.to_string()))?;

        Ok(body.themes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_options(css: &str, stale_time: Duration) -> RegistryOptions {
        RegistryOptions {
            use_parser: true,
            stale_time: Some(stale_time),
            parser_options: Some(ThemeConfig {
                css_content: Some(css.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_parser_strategy_resolves_inline_content() {
        let registry = ThemeRegistry::new("http://localhost:3000");
        let options = parser_options(".theme-mint{}", DEFAULT_STALE_TIME);

        let themes = registry.get_themes(&options).await.expect("parser path never fails");
        assert_eq!(themes, vec![Theme::new("mint", "Mint")]);
    }

    #[tokio::test]
    async fn test_fresh_entry_is_served_from_cache() {
        let registry = ThemeRegistry::new("http://localhost:3000");
        let first = parser_options(".theme-one{}", DEFAULT_STALE_TIME);
        let themes = registry.get_themes(&first).await.expect("resolve");
        assert_eq!(themes, vec![Theme::new("one", "One")]);

        // Same key, different stylesheet content: the cached result
        // wins while fresh.
        let second = parser_options(".theme-two{}", DEFAULT_STALE_TIME);
        let themes = registry.get_themes(&second).await.expect("resolve");
        assert_eq!(themes, vec![Theme::new("one", "One")]);
    }

    #[tokio::test]
    async fn test_stale_entry_is_recomputed() {
        let registry = ThemeRegistry::new("http://localhost:3000");
        let first = parser_options(".theme-one{}", Duration::ZERO);
        registry.get_themes(&first).await.expect("resolve");

        let second = parser_options(".theme-two{}", Duration::ZERO);
        let themes = registry.get_themes(&second).await.expect("resolve");
        assert_eq!(themes, vec![Theme::new("two", "Two")]);
    }

    #[tokio::test]
    async fn test_invalidate_forces_recompute() {
        let registry = ThemeRegistry::new("http://localhost:3000");
        let first = parser_options(".theme-one{}", DEFAULT_STALE_TIME);
        registry.get_themes(&first).await.expect("resolve");
        registry.invalidate(&first).await;

        let second = parser_options(".theme-two{}", DEFAULT_STALE_TIME);
        let themes = registry.get_themes(&second).await.expect("resolve");
        assert_eq!(themes, vec![Theme::new("two", "Two")]);
    }

    #[tokio::test]
    async fn test_api_and_parser_modes_cache_separately() {
        let registry = ThemeRegistry::new("http://localhost:3000");
        let parser = parser_options(".theme-one{}", DEFAULT_STALE_TIME);
        registry.get_themes(&parser).await.expect("resolve");

        // The endpoint strategy shares the default api path but not
        // the cache slot, so it must actually hit the (absent)
        // endpoint and fail rather than serve the parser result.
        let api = RegistryOptions {
            api_path: Some("http://127.0.0.1:1/api/themes".to_string()),
            ..Default::default()
        };
        let result = registry.get_themes(&api).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_api_strategy_surfaces_fetch_errors() {
        let registry = ThemeRegistry::new("http://127.0.0.1:1");
        let result = registry.get_themes(&RegistryOptions::default()).await;
        assert!(matches!(result, Err(ThemeError::Fetch { .. })));
    }
}
