use std::path::Path;
use themescan_core::resolver::FsThemeResolver;
use themescan_core::{find_theme, is_valid_theme_id};

/// Reports whether `id` names a theme discovered in the project.
/// Returns false (exit code 1 from the caller) for an unknown id.
pub fn run(
    project_root: &Path,
    id: &str,
    css_path: Option<String>,
    prefix: Option<String>,
) -> bool {
    let config = super::theme_config(css_path, prefix);
    let resolver = FsThemeResolver::new(project_root);
    let themes = resolver.resolve_themes(&config);

    if is_valid_theme_id(id, &themes) {
        // find_theme cannot miss here; the lookup is for the label.
        if let Some(theme) = find_theme(id, &themes) {
            println!("'{}' is a valid theme ({})", theme.id, theme.label);
        }
        true
    } else {
        let known: Vec<&str> = themes.iter().map(|theme| theme.id.as_str()).collect();
        eprintln!("'{}' is not a known theme. Available: {}", id, known.join(", "));
        false
    }
}
