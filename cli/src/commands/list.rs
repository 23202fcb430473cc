use std::path::Path;
use themescan_core::resolver::FsThemeResolver;

pub fn run(
    project_root: &Path,
    css_path: Option<String>,
    prefix: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = super::theme_config(css_path, prefix);
    let resolver = FsThemeResolver::new(project_root);
    let themes = resolver.resolve_themes(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&themes)?);
        return Ok(());
    }

    for theme in &themes {
        println!("{:<24} {}", theme.id, theme.label);
    }

    Ok(())
}
