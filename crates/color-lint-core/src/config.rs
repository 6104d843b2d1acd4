//! Configuration types for color-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for color-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Severity at which violations fail the run.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Glob patterns to include (if empty, all stylesheet files).
    #[serde(default)]
    pub include: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            include: Vec::new(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a boolean option.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(toml::Value::as_bool)
    }

    /// Gets a string option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_rule_enabled("color-types"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
root = "./styles"
exclude = ["**/vendor/**"]

[rules.color-types]
enabled = true
severity = "warning"
mode = "require"
types = ["hex", "rgb"]
block_helper_functions = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./styles"));
        assert_eq!(config.analyzer.exclude, vec!["**/vendor/**".to_string()]);
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(config.is_rule_enabled("color-types"));
        assert_eq!(config.rule_severity("color-types"), Some(Severity::Warning));

        let rule_config = config.rules.get("color-types").unwrap();
        assert_eq!(rule_config.get_str("mode"), Some("require"));
        assert_eq!(
            rule_config.get_option::<Vec<String>>("types"),
            Some(vec!["hex".to_string(), "rgb".to_string()])
        );
        assert_eq!(rule_config.get_bool("block_helper_functions"), Some(true));
        assert_eq!(rule_config.get_option::<Vec<String>>("exceptions"), None);
        assert_eq!(rule_config.get_option::<Vec<String>>("mode"), None);
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config::parse("[rules.color-types]\nenabled = false\n").expect("valid");
        assert!(!config.is_rule_enabled("color-types"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::parse("fail_on = [").expect_err("invalid");
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
