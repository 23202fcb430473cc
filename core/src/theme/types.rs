use serde::{Deserialize, Serialize};

/// Class prefix used for marker selectors when none is configured.
pub const DEFAULT_PREFIX: &str = "theme";

/// A discovered visual theme.
///
/// Carries nothing beyond identity and a display label; the CSS
/// variables behind a theme live in the hosting project's stylesheet,
/// addressed by the `.{prefix}-{id}` class convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Short identifier, unique within a resolved list (`[a-z0-9-]+`)
    pub id: String,
    /// Human-readable display label derived from the id
    pub label: String,
}

impl Theme {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Read-only options record accepted by the discovery calls.
///
/// Every field is optional; resolvers substitute the conventional
/// defaults documented on each field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Stylesheet location. Filesystem path for the fs resolver, URL
    /// path for the HTTP resolver (default `/index.css`).
    pub css_path: Option<String>,
    /// Inline stylesheet text. When present, no retrieval happens and
    /// `css_path` is ignored.
    pub css_content: Option<String>,
    /// Marker class prefix (default `"theme"`).
    pub prefix: Option<String>,
    /// Themes substituted when discovery fails or finds nothing
    /// (default [`default_fallback_themes`]).
    pub fallback_themes: Option<Vec<Theme>>,
}

/// Built-in fallback list used when discovery fails and the caller
/// configured no fallback of their own.
pub fn default_fallback_themes() -> Vec<Theme> {
    vec![
        Theme::new("default", "Default"),
        Theme::new("claude", "Claude"),
    ]
}
