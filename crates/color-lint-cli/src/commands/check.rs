//! Check command implementation.

use anyhow::{Context, Result};
use color_lint_core::{Analyzer, Config, RuleConfig};
use color_lint_rules::{color_types, rules_from_config};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line overrides for the `color-types` options.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Replaces `mode`.
    pub mode: Option<String>,
    /// Replaces `types`.
    pub types: Option<Vec<String>>,
}

impl Overrides {
    /// Writes the overrides into the `[rules.color-types]` table.
    fn apply(&self, config: &mut Config) {
        if self.mode.is_none() && self.types.is_none() {
            return;
        }
        let rule: &mut RuleConfig = config
            .rules
            .entry(color_types::NAME.to_string())
            .or_default();
        if let Some(mode) = &self.mode {
            rule.options
                .insert("mode".to_string(), toml::Value::String(mode.clone()));
        }
        if let Some(types) = &self.types {
            let values = types
                .iter()
                .map(|t| toml::Value::String(t.trim().to_string()))
                .collect();
            rule.options
                .insert("types".to_string(), toml::Value::Array(values));
        }
    }
}

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    overrides: &Overrides,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = source.load()?;
    overrides.apply(&mut config);

    let rules = rules_from_config(&config).context("Invalid rule options")?;
    let fail_on = config.fail_on();

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(exclude);
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    let source_root = if path.is_file() {
        path.parent().unwrap_or(path)
    } else {
        path
    };
    super::output::print(&result, format, source_root)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_options() {
        let mut config = Config::parse(
            r#"
[rules.color-types]
severity = "warning"
mode = "block"
types = ["hex"]
"#,
        )
        .unwrap();
        let overrides = Overrides {
            mode: Some("require".to_string()),
            types: Some(vec!["rgb".to_string(), " named".to_string()]),
        };
        overrides.apply(&mut config);

        let rule = &config.rules["color-types"];
        assert_eq!(rule.get_str("mode"), Some("require"));
        assert_eq!(
            rule.get_option::<Vec<String>>("types"),
            Some(vec!["rgb".to_string(), "named".to_string()])
        );
        assert_eq!(rule.severity, Some(color_lint_core::Severity::Warning));
    }

    #[test]
    fn empty_overrides_leave_config_untouched() {
        let mut config = Config::default();
        Overrides::default().apply(&mut config);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn overrides_create_rule_table() {
        let mut config = Config::default();
        let overrides = Overrides {
            mode: Some("REQUIRE".to_string()),
            types: None,
        };
        overrides.apply(&mut config);
        let rules = rules_from_config(&config).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut config = Config::default();
        let overrides = Overrides {
            mode: None,
            types: Some(vec!["neon".to_string()]),
        };
        overrides.apply(&mut config);
        assert!(rules_from_config(&config).is_err());
    }
}
