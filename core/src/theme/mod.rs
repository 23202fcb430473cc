//! # Theme Module
//!
//! Data model and pure logic for CSS-discovered themes.
//!
//! A theme is addressed by convention through a marker class selector
//! of the form `.{prefix}-{id}` in the hosting project's stylesheet.
//! This module owns the three total, side-effect-free pieces of that
//! scheme:
//!
//! - **[`types`]** - `Theme` and `ThemeConfig` value types plus the
//!   built-in fallback list
//! - **[`parser`]** - marker-selector scanner and label formatter
//! - **[`validation`]** - membership checks and the theme-id grammar
//!
//! Nothing here performs I/O; stylesheet retrieval and the fallback
//! policy live in [`crate::resolver`].

pub mod parser;
pub mod types;
pub mod validation;

pub use types::{Theme, ThemeConfig};
