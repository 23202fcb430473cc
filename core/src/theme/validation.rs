use crate::theme::types::Theme;

/// Core validation trait shared by the crate's validators.
///
/// Validators are zero-sized and stateless so they can be composed
/// freely; `T` may be unsized (`str`) to validate borrowed input.
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Returns true iff some theme in `available_themes` carries `theme_id`.
///
/// This is the membership check gating externally supplied ids (a
/// persisted selection, a query value) against the resolved list.
pub fn is_valid_theme_id(theme_id: &str, available_themes: &[Theme]) -> bool {
    available_themes.iter().any(|theme| theme.id == theme_id)
}

/// Looks up the first theme matching `theme_id`, or `None` when absent.
pub fn find_theme<'a>(theme_id: &str, available_themes: &'a [Theme]) -> Option<&'a Theme> {
    available_themes.iter().find(|theme| theme.id == theme_id)
}

/// Validation errors for theme identifiers supplied by callers.
#[derive(Debug, Clone)]
pub struct ThemeIdError {
    pub id: String,
    pub reason: String,
}

impl ThemeIdError {
    pub fn user_message(&self) -> String {
        format!(
            "Invalid theme id: '{}'\n\n\
            Reason: {}\n\n\
            Theme ids use lowercase letters, digits, and hyphens (e.g. 'modern-minimal').",
            self.id, self.reason
        )
    }
}

impl std::fmt::Display for ThemeIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid theme id '{}': {}", self.id, self.reason)
    }
}

impl std::error::Error for ThemeIdError {}

/// Validator for theme ids against the `[a-z0-9-]+` grammar.
///
/// Used before writing a new marker selector into a stylesheet; the
/// scanner would silently skip an id outside the grammar, so bad names
/// are rejected up front.
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = ThemeIdError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeIdError {
                id: input.to_string(),
                reason: "Id cannot be empty".to_string(),
            });
        }

        if input.len() > 50 {
            return Err(ThemeIdError {
                id: input.to_string(),
                reason: "Id too long (max 50 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ThemeIdError {
                id: input.to_string(),
                reason: "Id contains invalid characters (only lowercase letters, digits, and hyphens allowed)"
                    .to_string(),
            });
        }

        if input.starts_with('-') || input.ends_with('-') {
            return Err(ThemeIdError {
                id: input.to_string(),
                reason: "Id cannot start or end with a hyphen".to_string(),
            });
        }

        Ok(())
    }
}
