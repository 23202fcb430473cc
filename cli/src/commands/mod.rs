pub mod add;
pub mod check;
pub mod list;

use crate::config;
use themescan_core::ThemeConfig;

/// Merge command-line overrides with the loaded configuration file.
pub(crate) fn theme_config(css_path: Option<String>, prefix: Option<String>) -> ThemeConfig {
    let file_config = config::get_config();
    ThemeConfig {
        css_path: css_path.or_else(|| file_config.css_path.clone()),
        css_content: None,
        prefix: prefix.or_else(|| file_config.prefix.clone()),
        fallback_themes: file_config.fallback_themes.clone(),
    }
}
