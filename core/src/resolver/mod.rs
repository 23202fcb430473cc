//! # Resolver Module
//!
//! Stylesheet retrieval and the uniform fallback policy.
//!
//! A resolver obtains raw stylesheet text, hands it to the scanner,
//! and guarantees the caller a usable theme list: any retrieval
//! failure, and a scan that finds nothing, both substitute the
//! configured fallback list (or the built-in default pair). No error
//! ever escapes a resolver; failures are logged for diagnostics only.
//!
//! The two variants are separate types rather than one function
//! branching on ambient environment detection, so the caller picks
//! the source capability explicitly:
//!
//! - **[`FsThemeResolver`]** - synchronous, reads the hosting
//!   project's stylesheet from disk, with best-effort framework
//!   detection for the conventional default path
//! - **[`HttpThemeResolver`]** - asynchronous, fetches the stylesheet
//!   over HTTP
//!
//! Both accept inline stylesheet text through
//! [`ThemeConfig::css_content`](crate::theme::types::ThemeConfig),
//! which skips retrieval entirely.

pub mod fs;
pub mod http;

pub use fs::{Framework, FsThemeResolver};
pub use http::HttpThemeResolver;

use crate::theme::types::{Theme, ThemeConfig, default_fallback_themes};

/// The fallback list for a configuration: caller-supplied when
/// present, the built-in default pair otherwise.
pub(crate) fn fallback_list(config: &ThemeConfig) -> Vec<Theme> {
    config
        .fallback_themes
        .clone()
        .unwrap_or_else(default_fallback_themes)
}
