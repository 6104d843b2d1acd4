//! Rule to restrict which color notations a stylesheet may use.
//!
//! # Rationale
//!
//! Design systems usually want colors to come from variables or a single
//! notation. This rule classifies every literal color definition by kind and
//! enforces a require-list or block-list of kinds.
//!
//! # Detected Patterns
//!
//! - Declarations: `color: #000`, `border: 1px solid blue`
//! - Less variable assignments: `@brand: rgb(0, 0, 0);`
//! - Less mixin calls: `.button(#123);`
//! - Less mixin definition defaults: `.button(@color: blue) { ... }`
//! - SCSS variable assignments: `$brand: hsl(0, 0%, 0%);`
//!
//! Variable references (`@x`, `$x`, `var(--x)`) are never reported.
//!
//! # Configuration
//!
//! - `mode`: `"block"` (default) or `"require"`
//! - `types`: kinds the mode applies to (default: all nine kinds)
//! - `block_helper_functions` / `allow_helper_functions`: reserved toggle
//! - `exceptions`: regexes; nodes on a matching source line are skipped
//!
//! # Allowing
//!
//! `/* color-lint: allow(color-types) reason="..." */` on the line of the
//! node or the line above it.

mod classify;
mod kind;
mod names;
mod node;
mod options;
mod policy;

pub use classify::classify;
pub use kind::{ColorKind, ColorKindSet, UnknownColorKind};
pub use names::is_named_color;
pub use node::ClassifiableNode;
pub use options::{parse_types, ColorTypesOptions, Mode, OptionsError};
pub use policy::{
    blocked_message, evaluate, judge, no_types_required_message, ColorViolation, Verdict,
};

use color_lint_core::syntax::Stylesheet;
use color_lint_core::utils::allowance::check_allow_with_reason;
use color_lint_core::{FileContext, Rule, RuleConfig, Severity, Suggestion, Violation};
use tracing::debug;

/// Rule code for color-types.
pub const CODE: &str = "CL001";

/// Rule name for color-types.
pub const NAME: &str = "color-types";

/// Restricts color definitions to an allowed set of notations.
#[derive(Debug, Clone)]
pub struct ColorTypes {
    options: ColorTypesOptions,
    severity: Severity,
}

impl Default for ColorTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorTypes {
    /// Creates a new rule that blocks every color kind.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ColorTypesOptions::default())
    }

    /// Creates a rule from validated options.
    #[must_use]
    pub fn with_options(options: ColorTypesOptions) -> Self {
        Self {
            options,
            severity: Severity::Error,
        }
    }

    /// Creates a rule from a `[rules.color-types]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn from_config(config: &RuleConfig) -> Result<Self, OptionsError> {
        let options = ColorTypesOptions::from_config(config)?;
        debug!(
            "color-types: mode={} types={:?} block_helper_functions={}",
            options.mode, options.types, options.block_helper_functions
        );
        Ok(Self::with_options(options))
    }

    /// Sets the policy direction.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Sets the kinds the mode applies to.
    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = ColorKind>) -> Self {
        let mut kinds = Vec::new();
        for kind in types {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        self.options.types = kinds;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &ColorTypesOptions {
        &self.options
    }
}

impl Rule for ColorTypes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restricts color definitions to allowed notations (hex, named, rgb, ...)"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, sheet: &Stylesheet) -> Vec<Violation> {
        let mut violations = Vec::new();

        for found in evaluate(sheet, ctx, &self.options) {
            let location = ctx.location(found.span);

            let allow_check = check_allow_with_reason(ctx.content, location.line, NAME);
            if allow_check.is_allowed() {
                if self.requires_allow_reason() && allow_check.reason().is_none() {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            Severity::Warning,
                            location,
                            format!("Allow directive for '{NAME}' is missing required reason"),
                        )
                        .with_suggestion(Suggestion::new(
                            "Add reason=\"...\" to explain why this exception is necessary",
                        )),
                    );
                }
                continue;
            }

            violations.push(
                Violation::new(CODE, NAME, self.severity, location, found.message)
                    .with_snippet(found.snippet)
                    .with_suggestion(suggestion_for(&self.options, &found.kinds)),
            );
        }

        violations
    }
}

fn suggestion_for(options: &ColorTypesOptions, kinds: &[ColorKind]) -> Suggestion {
    match options.mode {
        Mode::Require if !options.types.is_empty() => Suggestion::new(format!(
            "Use a variable or one of the required color types: {}",
            kind::format_kinds(&options.types)
        )),
        _ => Suggestion::new(format!(
            "Replace the {} color with a variable",
            kind::format_kinds(kinds)
        )),
    }
}
