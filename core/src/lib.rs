//! # Themescan Core Library
//!
//! Core library for CSS theme discovery and validation. A theme is a
//! named set of CSS custom-property overrides announced by a marker
//! class selector (`.theme-ocean-blue { ... }`); this crate scans
//! stylesheets for those markers, derives a stable `{id, label}` list,
//! validates externally supplied theme ids against it, and substitutes
//! a fallback list whenever discovery fails.
//!
//! ## Modules
//!
//! - [`theme`] - Theme data model, stylesheet scanner, and validation
//! - [`resolver`] - Filesystem and HTTP stylesheet resolution with fallback
//! - [`registry`] - Cached theme-list accessor with a staleness window
//! - [`api`] - Transport-agnostic theme-listing route handler
//! - [`error`] - Error types for the fallible surfaces

pub mod api;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod theme;

// Re-export commonly used types for easier access
pub use error::{ThemeError, ThemeResult};
pub use theme::parser::{format_theme_label, parse_themes_from_css};
pub use theme::types::{DEFAULT_PREFIX, Theme, ThemeConfig, default_fallback_themes};
pub use theme::validation::{Validator, find_theme, is_valid_theme_id};
