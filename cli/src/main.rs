use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod logger;

/// Discover, inspect, and extend the CSS themes of a web project.
#[derive(Parser)]
#[command(name = "themescan", version, about)]
struct Cli {
    /// Project root to operate on (default: current directory)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the themes discovered in the project stylesheet
    List {
        /// Stylesheet path (overrides framework detection)
        #[arg(long)]
        css_path: Option<String>,
        /// Marker class prefix (default "theme")
        #[arg(long)]
        prefix: Option<String>,
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch a theme definition and append its marker class to the stylesheet
    Add {
        /// Theme id (lowercase letters, digits, hyphens)
        name: String,
        /// URL of the theme definition JSON
        url: String,
        /// Stylesheet path (overrides framework detection)
        #[arg(long)]
        css_path: Option<String>,
    },
    /// Check whether a theme id is a legal selection for this project
    Check {
        /// Theme id to check
        id: String,
        /// Stylesheet path (overrides framework detection)
        #[arg(long)]
        css_path: Option<String>,
        /// Marker class prefix (default "theme")
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logger::setup_logger() {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }

    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::List {
            css_path,
            prefix,
            json,
        } => commands::list::run(&project_root, css_path, prefix, json),
        Command::Add {
            name,
            url,
            css_path,
        } => commands::add::run(&project_root, &name, &url, css_path).await,
        Command::Check {
            id,
            css_path,
            prefix,
        } => {
            let valid = commands::check::run(&project_root, &id, css_path, prefix);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
