use crate::theme::types::{DEFAULT_PREFIX, Theme};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Matcher for the default "theme" prefix, built once. Custom prefixes
// are rare and get a fresh matcher per call.
static DEFAULT_MARKER: Lazy<Regex> =
    Lazy::new(|| marker_regex(DEFAULT_PREFIX).expect("default prefix is a valid pattern"));

fn marker_regex(prefix: &str) -> Result<Regex, regex::Error> {
    // The prefix is caller-supplied and may contain regex metacharacters.
    Regex::new(&format!(r"\.{}-([a-z0-9-]+)\s*\{{", regex::escape(prefix)))
}

/// Formats a kebab-case theme id into a display label.
///
/// Splits on `-`, upper-cases the first character of each segment, and
/// joins with single spaces: `modern-minimal` becomes `Modern Minimal`.
/// Pure and total; an empty id yields an empty label.
pub fn format_theme_label(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scans stylesheet text for theme marker selectors.
///
/// A marker is a class selector of the shape `.{prefix}-{id}` followed
/// (possibly after whitespace) by an opening brace, where `id` matches
/// `[a-z0-9-]+`. Matching is purely syntactic over the raw text: the
/// scanner does not parse CSS and cannot tell a real rule from the
/// same text inside a comment or string literal. That simplification
/// is part of the contract.
///
/// Duplicate markers collapse to one entry and the result is sorted
/// bytewise ascending by id, with labels per [`format_theme_label`].
pub fn parse_themes_from_css(css_content: &str, prefix: Option<&str>) -> Vec<Theme> {
    let matcher = match prefix {
        None | Some(DEFAULT_PREFIX) => std::borrow::Cow::Borrowed(&*DEFAULT_MARKER),
        Some(custom) => match marker_regex(custom) {
            Ok(regex) => std::borrow::Cow::Owned(regex),
            // regex::escape produces a valid pattern for any input, so
            // this arm is unreachable in practice; an empty list keeps
            // the function total either way.
            Err(e) => {
                log::error!("Failed to build theme marker pattern: {e}");
                return Vec::new();
            }
        },
    };

    let theme_ids: BTreeSet<&str> = matcher
        .captures_iter(css_content)
        .filter_map(|captures| captures.get(1))
        .map(|id| id.as_str())
        .collect();

    theme_ids
        .into_iter()
        .map(|id| Theme::new(id, format_theme_label(id)))
        .collect()
}
