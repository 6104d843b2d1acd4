//! Rule registry: default and configured rule sets.

use crate::color_types::{self, ColorTypes, OptionsError};
use color_lint_core::{Config, RuleBox};

/// Returns every available rule with default options.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(ColorTypes::new())]
}

/// Builds every rule from its `[rules.<name>]` table in `config`.
///
/// Rules without a table use their defaults. Disabled rules are still
/// returned; the analyzer skips them.
///
/// # Errors
///
/// Returns an error if a rule's options are invalid.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, OptionsError> {
    let color_types = match config.rules.get(color_types::NAME) {
        Some(rule_config) => {
            let rule = ColorTypes::from_config(rule_config)?;
            match rule_config.severity {
                Some(severity) => rule.severity(severity),
                None => rule,
            }
        }
        None => ColorTypes::new(),
    };
    Ok(vec![Box::new(color_types)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules() {
        let rules = all_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["color-types"]);
        assert_eq!(rules[0].code(), "CL001");
    }

    #[test]
    fn test_rules_from_config() {
        let config = Config::parse(
            r#"
[rules.color-types]
severity = "warning"
mode = "require"
types = ["hex"]
"#,
        )
        .expect("valid config");
        let rules = rules_from_config(&config).expect("valid options");
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].default_severity(),
            color_lint_core::Severity::Warning
        );
    }

    #[test]
    fn test_invalid_options_fail_fast() {
        let config =
            Config::parse("[rules.color-types]\ntypes = [\"neon\"]\n").expect("valid toml");
        assert!(rules_from_config(&config).is_err());
    }
}
