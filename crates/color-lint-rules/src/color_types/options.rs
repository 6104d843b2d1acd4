//! Options for the `color-types` rule.

use super::kind::{ColorKind, UnknownColorKind};
use color_lint_core::RuleConfig;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Policy direction for the configured `types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only the listed kinds may be used.
    Require,
    /// The listed kinds may not be used.
    #[default]
    Block,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Require => f.write_str("require"),
            Self::Block => f.write_str("block"),
        }
    }
}

impl FromStr for Mode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "require" => Ok(Self::Require),
            "block" => Ok(Self::Block),
            _ => Err(OptionsError::UnknownMode(s.to_string())),
        }
    }
}

/// Invalid rule options. Raised when the rule is built, before any file is
/// checked.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// `mode` is not `require` or `block`.
    #[error("unknown mode `{0}` (expected `require` or `block`)")]
    UnknownMode(String),

    /// An entry of `types` is not a color kind.
    #[error(transparent)]
    UnknownType(#[from] UnknownColorKind),

    /// An option has the wrong TOML type.
    #[error("option `{key}` must be {expected}")]
    InvalidValue {
        /// Option name.
        key: &'static str,
        /// Expected shape, e.g. "a string".
        expected: &'static str,
    },

    /// An exception pattern is not a valid regular expression.
    #[error("invalid exception pattern `{pattern}`: {source}")]
    InvalidException {
        /// The rejected pattern.
        pattern: String,
        /// Regex compile error.
        source: regex::Error,
    },
}

/// Validated options for [`ColorTypes`](super::ColorTypes).
#[derive(Debug, Clone)]
pub struct ColorTypesOptions {
    /// Policy direction.
    pub mode: Mode,
    /// Kinds the mode applies to, without duplicates.
    pub types: Vec<ColorKind>,
    /// Reserved toggle for preprocessor color helpers such as `darken()`.
    pub block_helper_functions: bool,
    /// Source lines matching any of these are skipped.
    pub exceptions: Vec<Regex>,
}

impl Default for ColorTypesOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Block,
            types: ColorKind::ALL.to_vec(),
            block_helper_functions: false,
            exceptions: Vec::new(),
        }
    }
}

impl ColorTypesOptions {
    /// Reads options from a `[rules.color-types]` table, falling back to the
    /// defaults for absent keys.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown mode or color type, a value of the
    /// wrong type, or an exception that is not a valid regex.
    pub fn from_config(config: &RuleConfig) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        if let Some(mode) = read(config, "mode", "a string", RuleConfig::get_str)? {
            options.mode = mode.parse()?;
        }

        if let Some(names) =
            read(config, "types", STRINGS, RuleConfig::get_option::<Vec<String>>)?
        {
            options.types = parse_types(names.iter().map(String::as_str))?;
        }

        if let Some(block) =
            read(config, "block_helper_functions", BOOLEAN, RuleConfig::get_bool)?
        {
            options.block_helper_functions = block;
        } else if let Some(allow) =
            read(config, "allow_helper_functions", BOOLEAN, RuleConfig::get_bool)?
        {
            options.block_helper_functions = !allow;
        }

        if let Some(patterns) =
            read(config, "exceptions", STRINGS, RuleConfig::get_option::<Vec<String>>)?
        {
            options.exceptions = compile_exceptions(&patterns)?;
        }

        Ok(options)
    }

    /// Whether `line` matches a configured exception.
    #[must_use]
    pub fn is_exempt(&self, line: &str) -> bool {
        self.exceptions.iter().any(|re| re.is_match(line))
    }
}

const BOOLEAN: &str = "a boolean";
const STRINGS: &str = "an array of strings";

/// Reads `key` with a typed getter. A value of another type is an error
/// rather than a silent default.
fn read<'c, T>(
    config: &'c RuleConfig,
    key: &'static str,
    expected: &'static str,
    get: impl FnOnce(&'c RuleConfig, &str) -> Option<T>,
) -> Result<Option<T>, OptionsError> {
    match get(config, key) {
        Some(value) => Ok(Some(value)),
        None if config.options.contains_key(key) => {
            Err(OptionsError::InvalidValue { key, expected })
        }
        None => Ok(None),
    }
}

/// Parses kind names, dropping repeats and keeping first-seen order.
///
/// # Errors
///
/// Returns an error for the first name that is not a color kind.
pub fn parse_types<'a, I>(names: I) -> Result<Vec<ColorKind>, OptionsError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut types = Vec::new();
    for name in names {
        let kind: ColorKind = name.trim().parse()?;
        if !types.contains(&kind) {
            types.push(kind);
        }
    }
    Ok(types)
}

fn compile_exceptions(patterns: &[String]) -> Result<Vec<Regex>, OptionsError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| OptionsError::InvalidException {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
