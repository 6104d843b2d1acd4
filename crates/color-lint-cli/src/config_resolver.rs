//! Configuration file resolution with global fallback.
//!
//! Resolution order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `color-lint.toml` or `.color-lint.toml` in the checked directory or
//!    the nearest ancestor that has one
//! 3. `~/.color-lint/config.toml` (global fallback)
//! 4. No config found → defaults

use anyhow::{Context, Result};
use color_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.color-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["color-lint.toml", ".color-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(project_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Searches `start` and then each ancestor for a project config file.
fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory path.
///
/// Resolution: `$COLOR_LINT_CONFIG_DIR` > `~/.color-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("COLOR_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".color-lint"))
}
