//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! /* color-lint: allow(color-types) reason="brand palette" */
//! // color-lint: allow(color-types)      (LESS and SCSS only)
//! ```
//!
//! A directive applies to the line it sits on and to the line after it.

use std::collections::HashSet;

const DIRECTIVE_PREFIX: &str = "color-lint:";

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Checks stylesheet source for an allowance comment covering `line`.
///
/// # Arguments
///
/// * `content` - Stylesheet source
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Name of the rule to check for
///
/// # Returns
///
/// `AllowCheck::Allowed` with optional reason if a directive naming the rule
/// (or `all`) is found on the line or the line before it.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        if let Some(directive) = parse_allow_directive(lines[check_line - 1]) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line that contains a comment.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment_content = comment_body(line)?;

    let directive = comment_content.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}

/// Returns the trimmed text of the first comment on `line`.
///
/// Block comments may trail a declaration on the same line.
fn comment_body(line: &str) -> Option<&str> {
    if let Some(start) = line.find("/*") {
        let body = &line[start + 2..];
        let body = body.find("*/").map_or(body, |end| &body[..end]);
        return Some(body.trim());
    }
    line.find("//").map(|start| line[start + 2..].trim())
}
