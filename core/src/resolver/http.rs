use crate::error::{ThemeError, ThemeResult};
use crate::resolver::fallback_list;
use crate::theme::parser::parse_themes_from_css;
use crate::theme::types::{Theme, ThemeConfig};

const DEFAULT_CSS_PATH: &str = "/index.css";

/// Network-context theme resolver.
///
/// Fetches the stylesheet over HTTP and scans it for theme markers.
/// Shares the fallback contract with the filesystem resolver: the
/// caller always receives a usable list, and retrieval failures are
/// only visible in the log.
pub struct HttpThemeResolver {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpThemeResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Share an existing client (connection pooling across callers).
    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client,
        }
    }

    /// Resolves the theme list, fetching `css_path` (default
    /// `/index.css`) unless inline `css_content` is configured.
    pub async fn resolve_themes(&self, config: &ThemeConfig) -> Vec<Theme> {
        let css_content = match &config.css_content {
            Some(inline) => inline.clone(),
            None => {
                let css_path = config.css_path.as_deref().unwrap_or(DEFAULT_CSS_PATH);
                match self.fetch_css(css_path).await {
                    Ok(content) => content,
                    Err(e) => {
                        log::error!("Failed to fetch stylesheet: {e}");
                        return fallback_list(config);
                    }
                }
            }
        };

        let themes = parse_themes_from_css(&css_content, config.prefix.as_deref());
        if themes.is_empty() {
            log::warn!("No theme markers found in fetched stylesheet, using fallback themes");
            return fallback_list(config);
        }

        themes
    }

    async fn fetch_css(&self, css_path: &str) -> ThemeResult<String> {
        let url = self.absolute_url(css_path);

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

        response.text().await.map_err(|e| ThemeError::fetch(&url, e))
    }

    pub(crate) fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if let Some(stripped) = path.strip_prefix('/') {
            format!("{}/{stripped}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::Theme;

    #[test]
    fn test_absolute_url_joining() {
        let resolver = HttpThemeResolver::new("http://localhost:3000/");
        assert_eq!(
            resolver.absolute_url("/index.css"),
            "http://localhost:3000/index.css"
        );
        assert_eq!(
            resolver.absolute_url("styles/app.css"),
            "http://localhost:3000/styles/app.css"
        );
        assert_eq!(
            resolver.absolute_url("https://cdn.example.com/site.css"),
            "https://cdn.example.com/site.css"
        );
    }

    #[tokio::test]
    async fn test_inline_content_needs_no_transport() {
        let resolver = HttpThemeResolver::new("http://localhost:3000");
        let config = ThemeConfig {
            css_content: Some(".theme-claude{} .theme-ocean-blue{}".to_string()),
            ..Default::default()
        };

        let themes = resolver.resolve_themes(&config).await;
        assert_eq!(
            themes,
            vec![
                Theme::new("claude", "Claude"),
                Theme::new("ocean-blue", "Ocean Blue"),
            ]
        );
    }

    #[tokio::test]
    async fn test_inline_content_without_markers_falls_back() {
        let resolver = HttpThemeResolver::new("http://localhost:3000");
        let config = ThemeConfig {
            css_content: Some(":root { --x: 1; }".to_string()),
            fallback_themes: Some(vec![Theme::new("solo", "Solo")]),
            ..Default::default()
        };

        let themes = resolver.resolve_themes(&config).await;
        assert_eq!(themes, vec![Theme::new("solo", "Solo")]);
    }

    #[tokio::test]
    async fn test_unreachable_host_returns_builtin_fallback() {
        // Nothing listens on the loopback port, so the connection is
        // refused immediately.
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .expect("client builds");
        let resolver = HttpThemeResolver::with_client("http://127.0.0.1:1", client);
        let config = ThemeConfig {
            css_path: Some("/index.css".to_string()),
            ..Default::default()
        };

        let themes = resolver.resolve_themes(&config).await;
        assert_eq!(
            themes,
            vec![
                Theme::new("default", "Default"),
                Theme::new("claude", "Claude"),
            ]
        );
    }
}
