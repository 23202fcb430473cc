use crate::resolver::fallback_list;
use crate::theme::parser::parse_themes_from_css;
use crate::theme::types::{Theme, ThemeConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Frameworks recognized when inferring the conventional stylesheet
/// location. Detection is best-effort; anything unrecognizable is
/// [`Framework::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    NextJs,
    Vite,
    Unknown,
}

/// Filesystem-context theme resolver.
///
/// Reads the hosting project's stylesheet from disk and scans it for
/// theme markers. Infallible by contract: retrieval failures and
/// empty scans both resolve to the fallback list.
pub struct FsThemeResolver {
    project_root: PathBuf,
}

impl FsThemeResolver {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Resolver rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Resolves the theme list for this project.
    ///
    /// Source precedence: inline `css_content`, explicit `css_path`
    /// (joined to the project root when relative), then the
    /// framework-conventional default path. Never fails and never
    /// returns an empty list unless the configured fallback is empty.
    pub fn resolve_themes(&self, config: &ThemeConfig) -> Vec<Theme> {
        let css_content = match &config.css_content {
            Some(inline) => inline.clone(),
            None => {
                let css_path = self.css_path(config);
                match fs::read_to_string(&css_path) {
                    Ok(content) => content,
                    Err(e) => {
                        log::error!(
                            "Failed to read stylesheet '{}': {e}",
                            css_path.display()
                        );
                        return fallback_list(config);
                    }
                }
            }
        };

        let themes = parse_themes_from_css(&css_content, config.prefix.as_deref());
        if themes.is_empty() {
            log::warn!("No theme markers found in stylesheet, using fallback themes");
            return fallback_list(config);
        }

        themes
    }

    /// The stylesheet path this resolver would read for `config`.
    pub fn css_path(&self, config: &ThemeConfig) -> PathBuf {
        match &config.css_path {
            Some(explicit) => {
                let explicit = Path::new(explicit);
                if explicit.is_absolute() {
                    explicit.to_path_buf()
                } else {
                    self.project_root.join(explicit)
                }
            }
            None => self.default_css_path(),
        }
    }

    /// Classifies the hosting project by its declared dependencies.
    ///
    /// Reads `package.json` under the project root; a dependency or
    /// dev-dependency on `next` or `vite` classifies the project.
    /// Missing, unreadable, or unrecognizable descriptors classify as
    /// [`Framework::Unknown`]. Never fails.
    pub fn detect_framework(&self) -> Framework {
        let descriptor_path = self.project_root.join("package.json");
        let descriptor = match fs::read_to_string(&descriptor_path) {
            Ok(content) => content,
            Err(_) => return Framework::Unknown,
        };

        let package: serde_json::Value = match serde_json::from_str(&descriptor) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "Unparseable project descriptor '{}': {e}",
                    descriptor_path.display()
                );
                return Framework::Unknown;
            }
        };

        if Self::declares_dependency(&package, "next") {
            Framework::NextJs
        } else if Self::declares_dependency(&package, "vite") {
            Framework::Vite
        } else {
            Framework::Unknown
        }
    }

    fn declares_dependency(package: &serde_json::Value, name: &str) -> bool {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| !package[section][name].is_null())
    }

    fn default_css_path(&self) -> PathBuf {
        match self.detect_framework() {
            Framework::NextJs | Framework::Unknown => {
                self.project_root.join("app").join("globals.css")
            }
            Framework::Vite => {
                let candidates = [
                    self.project_root.join("src").join("index.css"),
                    self.project_root.join("src").join("main.css"),
                    self.project_root.join("src").join("styles.css"),
                    self.project_root.join("src").join("globals.css"),
                ];

                for candidate in &candidates {
                    if candidate.exists() {
                        return candidate.clone();
                    }
                }

                // No conventional file exists; the first guess still
                // produces a deterministic (and clearly logged) read
                // failure downstream.
                candidates[0].clone()
            }
        }
    }
}
