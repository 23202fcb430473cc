use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use themescan_core::resolver::FsThemeResolver;
use themescan_core::theme::validation::{ThemeIdValidator, Validator};
use themescan_core::{format_theme_label, is_valid_theme_id, parse_themes_from_css};

/// Theme definition fetched from a theme registry
/// (e.g. `https://tweakcn.com/r/themes/modern-minimal.json`).
#[derive(Debug, Deserialize)]
struct ThemeDefinition {
    #[serde(rename = "cssVars")]
    css_vars: CssVars,
}

#[derive(Debug, Deserialize)]
struct CssVars {
    #[serde(default)]
    light: BTreeMap<String, String>,
    #[serde(default)]
    dark: BTreeMap<String, String>,
}

pub async fn run(
    project_root: &Path,
    name: &str,
    url: &str,
    css_path: Option<String>,
) -> anyhow::Result<()> {
    ThemeIdValidator
        .validate(name)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let config = super::theme_config(css_path, None);
    let resolver = FsThemeResolver::new(project_root);
    let stylesheet_path = resolver.css_path(&config);

    let existing_css = fs::read_to_string(&stylesheet_path).with_context(|| {
        format!("Failed to read stylesheet '{}'", stylesheet_path.display())
    })?;

    let existing_themes = parse_themes_from_css(&existing_css, config.prefix.as_deref());
    if is_valid_theme_id(name, &existing_themes) {
        bail!("Theme '{name}' already exists in '{}'", stylesheet_path.display());
    }

    println!("Adding theme: {name}");
    println!("From: {url}");

    let definition = fetch_definition(url).await?;
    if definition.css_vars.light.is_empty() && definition.css_vars.dark.is_empty() {
        bail!("Theme definition at '{url}' contains no CSS variables");
    }

    let prefix = config.prefix.as_deref().unwrap_or("theme");
    let block = render_theme_block(name, prefix, &definition);

    let backup_path = backup_file(&stylesheet_path)?;
    match append_block(&stylesheet_path, &block) {
        Ok(()) => {
            let _ = fs::remove_file(&backup_path);
            println!("Theme class .{prefix}-{name} added to '{}'", stylesheet_path.display());
            println!("It will appear in the theme list as '{}'", format_theme_label(name));
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update stylesheet, restoring backup: {e}");
            fs::copy(&backup_path, &stylesheet_path).with_context(|| {
                format!(
                    "Failed to restore backup '{}' over '{}'",
                    backup_path.display(),
                    stylesheet_path.display()
                )
            })?;
            let _ = fs::remove_file(&backup_path);
            Err(e)
        }
    }
}

async fn fetch_definition(url: &str) -> anyhow::Result<ThemeDefinition> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch theme definition from '{url}'"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Theme registry answered {status} for '{url}'");
    }

    response
        .json::<ThemeDefinition>()
        .await
        .with_context(|| format!("Theme definition at '{url}' is not valid JSON"))
}

fn backup_file(path: &Path) -> anyhow::Result<PathBuf> {
    let backup_path = path.with_extension(format!(
        "css.backup-{}",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    ));
    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to back up '{}'", path.display()))?;
    Ok(backup_path)
}

fn append_block(path: &Path, block: &str) -> anyhow::Result<()> {
    let mut css = fs::read_to_string(path)?;
    css.push_str(block);
    fs::write(path, css)?;
    Ok(())
}

fn render_variables(vars: &BTreeMap<String, String>) -> String {
    vars.iter()
        .map(|(key, value)| {
            let key = key.strip_prefix("--").unwrap_or(key);
            format!("  --{key}: {value};")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_theme_block(name: &str, prefix: &str, definition: &ThemeDefinition) -> String {
    format!(
        "\n/* Theme: {label} */\n\
         .{prefix}-{name} {{\n{light}\n}}\n\n\
         .dark .{prefix}-{name} {{\n{dark}\n}}\n",
        label = format_theme_label(name),
        light = render_variables(&definition.css_vars.light),
        dark = render_variables(&definition.css_vars.dark),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(light: &[(&str, &str)], dark: &[(&str, &str)]) -> ThemeDefinition {
        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        ThemeDefinition {
            css_vars: CssVars {
                light: to_map(light),
                dark: to_map(dark),
            },
        }
    }

    #[test]
    fn test_render_theme_block_shape() {
        let definition = definition(
            &[("background", "oklch(1 0 0)"), ("primary", "oklch(0.2 0 0)")],
            &[("background", "oklch(0.1 0 0)")],
        );

        let block = render_theme_block("modern-minimal", "theme", &definition);
        assert!(block.contains("/* Theme: Modern Minimal */"));
        assert!(block.contains(".theme-modern-minimal {"));
        assert!(block.contains(".dark .theme-modern-minimal {"));
        assert!(block.contains("  --background: oklch(1 0 0);"));
        assert!(block.contains("  --primary: oklch(0.2 0 0);"));
    }

    #[test]
    fn test_rendered_block_is_discoverable_by_the_scanner() {
        let definition = definition(&[("background", "white")], &[]);
        let block = render_theme_block("fresh-mint", "theme", &definition);

        let themes = parse_themes_from_css(&block, None);
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].id, "fresh-mint");
        assert_eq!(themes[0].label, "Fresh Mint");
    }

    #[test]
    fn test_render_variables_normalizes_leading_dashes() {
        let mut vars = BTreeMap::new();
        vars.insert("--accent".to_string(), "red".to_string());
        vars.insert("surface".to_string(), "blue".to_string());

        let rendered = render_variables(&vars);
        assert_eq!(rendered, "  --accent: red;\n  --surface: blue;");
    }
}
