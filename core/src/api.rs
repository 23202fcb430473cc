//! Transport-agnostic theme-listing route handler.
//!
//! The HTTP boundary is a pass-through: `GET <apiPath>` answers
//! `200 {"themes": [...]}` from the filesystem resolver, or
//! `500 {"error": ...}` when the response body cannot be built. No
//! query parameters, no authentication. The handler is a plain value
//! so any host framework can mount it; this crate does not bind a
//! socket.

use crate::resolver::FsThemeResolver;
use crate::theme::types::ThemeConfig;
use serde_json::json;

/// Minimal response value a host framework maps onto its own
/// response type.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Theme-listing route around the filesystem resolver.
pub struct ThemeApiRoute {
    resolver: FsThemeResolver,
    config: ThemeConfig,
}

impl ThemeApiRoute {
    pub fn new(resolver: FsThemeResolver, config: ThemeConfig) -> Self {
        Self { resolver, config }
    }

    /// Handles `GET` on the theme-listing path.
    ///
    /// The resolver is infallible, so in practice this always answers
    /// 200; the 500 arm keeps the boundary contract for body-building
    /// failures.
    pub fn handle(&self) -> ApiResponse {
        let themes = self.resolver.resolve_themes(&self.config);

        match serde_json::to_value(&themes) {
            Ok(themes) => ApiResponse {
                status: 200,
                body: json!({ "themes": themes }),
            },
            Err(e) => {
                log::error!("Failed to serialize theme list: {e}");
                ApiResponse {
                    status: 500,
                    body: json!({ "error": "Failed to get themes" }),
                }
            }
        }
    }
}
