//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# color-lint configuration

# Exit with status 1 when a violation at or above this severity is found
# (info | warning | error)
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./styles"

# Glob patterns of stylesheets to analyze (default: every .css, .less, .scss)
# include = ["**/*.css", "**/*.less", "**/*.scss"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.color-types]
enabled = true
# severity = "warning"  # Override default severity

# "block" rejects the listed types, "require" rejects everything else
mode = "block"
types = ["hex", "named", "rgb", "rgba", "hsl", "hsla", "hsv", "hsva", "argb"]

# Regexes matched against each source line; matching lines are skipped
# exceptions = ["^\\s*--brand-"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("color-lint.toml"), force)?;

    println!("Created color-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit color-lint.toml to choose the allowed color types");
    println!("  2. Run: color-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_builds_rules() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("color-types"));
        let rules = color_lint_rules::rules_from_config(&config).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("color-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
