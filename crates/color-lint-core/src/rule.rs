//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::Stylesheet;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a parsed stylesheet.
///
/// Rules receive the parsed tree together with the file context and return
/// the violations they found. Rules hold no state between files.
///
/// # Example
///
/// ```ignore
/// use color_lint_core::{FileContext, Rule, Severity, Stylesheet, Violation};
///
/// pub struct NoImportant;
///
/// impl Rule for NoImportant {
///     fn name(&self) -> &'static str { "no-important" }
///     fn code(&self) -> &'static str { "CL100" }
///
///     fn check(&self, ctx: &FileContext, sheet: &Stylesheet) -> Vec<Violation> {
///         sheet
///             .declarations()
///             .into_iter()
///             .filter(|decl| decl.important)
///             .map(|decl| {
///                 Violation::new(
///                     self.code(),
///                     self.name(),
///                     Severity::Warning,
///                     ctx.location(decl.span),
///                     "!important is not allowed",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "color-types").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single stylesheet and returns any violations found.
    fn check(&self, ctx: &FileContext, sheet: &Stylesheet) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
