//! color-lint CLI tool.
//!
//! Usage:
//! ```bash
//! color-lint check [OPTIONS] [PATH]
//! color-lint list-rules
//! color-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter restricting the color notations used in CSS, Less and SCSS
#[derive(Parser)]
#[command(name = "color-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// File or directory to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Policy direction for color-types: "block" or "require"
        #[arg(long)]
        mode: Option<String>,

        /// Color kinds the mode applies to (comma-separated)
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<String>>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Annotated source excerpts.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
            mode,
            types,
        } => {
            let overrides = commands::check::Overrides { mode, types };
            let project_dir = if path.is_file() {
                path.parent().map(PathBuf::from).unwrap_or_default()
            } else {
                path.clone()
            };
            let source = config_resolver::resolve(&project_dir, cli.config.as_deref());
            commands::check::run(&path, format, exclude, &overrides, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
