use config::{Config, Environment, File};
use serde::Deserialize;
use themescan_core::Theme;

/// CLI configuration loaded from `themescan.toml` and environment
/// variables (prefix `THEMESCAN`, `__` separator). Every field is
/// optional; command-line flags override file values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub css_path: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub fallback_themes: Option<Vec<Theme>>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error (default warn)
    #[serde(default)]
    pub level: Option<String>,
    /// Log file path; stderr when unset
    #[serde(default)]
    pub file: Option<String>,
}

static CONFIG: std::sync::OnceLock<CliConfig> = std::sync::OnceLock::new();

fn load_config() -> CliConfig {
    dotenv::dotenv().ok();

    // The config file is optional for a CLI; defaults cover everything.
    let file_source = File::with_name("themescan").required(false);
    let env_source = Environment::with_prefix("THEMESCAN").separator("__");

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Configuration loading failed, using defaults: {e}");
            return CliConfig::default();
        }
    };

    match config.try_deserialize::<CliConfig>() {
        Ok(cli_config) => cli_config,
        Err(e) => {
            log::warn!("Failed to deserialize configuration, using defaults: {e}");
            CliConfig::default()
        }
    }
}

pub fn get_config() -> &'static CliConfig {
    CONFIG.get_or_init(load_config)
}
