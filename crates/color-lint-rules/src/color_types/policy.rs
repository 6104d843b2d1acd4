//! Mode evaluation and stylesheet traversal for `color-types`.

use super::classify::classify;
use super::kind::{format_kinds, ColorKind, ColorKindSet};
use super::node::ClassifiableNode;
use super::options::{ColorTypesOptions, Mode};
use color_lint_core::syntax::{parse, Dialect, Node, Rule, Span, Stylesheet};
use color_lint_core::FileContext;
use tracing::{debug, trace};

/// Message for a node whose kinds include a disallowed one.
#[must_use]
pub fn blocked_message(snippet: &str, kinds: &[ColorKind]) -> String {
    format!(
        "Color definitions of type {} are blocked: \"{snippet}\"",
        format_kinds(kinds)
    )
}

/// Message for require mode with an empty `types` list.
#[must_use]
pub fn no_types_required_message(kinds: &[ColorKind]) -> String {
    format!(
        "Color types not allowed because no required types were given: {}",
        format_kinds(kinds)
    )
}

/// Outcome of checking one node's kinds against the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Require mode with nothing required; carries every detected kind.
    NoTypesRequired(Vec<ColorKind>),
    /// The node uses these disallowed kinds, in detection order.
    Blocked(Vec<ColorKind>),
}

impl Verdict {
    /// Kinds named in the message.
    #[must_use]
    pub fn kinds(&self) -> &[ColorKind] {
        match self {
            Self::NoTypesRequired(kinds) | Self::Blocked(kinds) => kinds,
        }
    }

    /// Diagnostic text for a node serialized as `snippet`.
    #[must_use]
    pub fn message(&self, snippet: &str) -> String {
        match self {
            Self::NoTypesRequired(kinds) => no_types_required_message(kinds),
            Self::Blocked(kinds) => blocked_message(snippet, kinds),
        }
    }
}

/// Applies the mode to the kinds detected in one node.
///
/// Returns `None` when the node complies.
#[must_use]
pub fn judge(kinds: &ColorKindSet, options: &ColorTypesOptions) -> Option<Verdict> {
    if kinds.is_empty() {
        return None;
    }
    match options.mode {
        Mode::Require if options.types.is_empty() => {
            Some(Verdict::NoTypesRequired(kinds.as_slice().to_vec()))
        }
        Mode::Require => {
            let illegal: Vec<ColorKind> =
                kinds.iter().filter(|k| !options.types.contains(k)).collect();
            (!illegal.is_empty()).then_some(Verdict::Blocked(illegal))
        }
        Mode::Block => {
            let illegal: Vec<ColorKind> =
                kinds.iter().filter(|k| options.types.contains(k)).collect();
            (!illegal.is_empty()).then_some(Verdict::Blocked(illegal))
        }
    }
}

/// A policy violation found in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorViolation {
    /// Diagnostic text.
    pub message: String,
    /// Span of the offending node in the file.
    pub span: Span,
    /// Serialized node text.
    pub snippet: String,
    /// Kinds named in the message.
    pub kinds: Vec<ColorKind>,
}

/// Walks `sheet` in document order and checks every node that can define a
/// color.
///
/// Visited nodes are declarations, Less variable assignments, Less mixin
/// calls, and the parameters of Less mixin definitions (rules whose selector
/// contains `@` and `(`). Nodes on a line matching an exception are skipped.
#[must_use]
pub fn evaluate(
    sheet: &Stylesheet,
    ctx: &FileContext<'_>,
    options: &ColorTypesOptions,
) -> Vec<ColorViolation> {
    let mut violations = Vec::new();
    sheet.walk(|node| match node {
        Node::Declaration(decl) => {
            let node = ClassifiableNode::Declaration(decl);
            violations.extend(check_node(&node, 0, ctx, options));
        }
        Node::AtRule(at) => {
            let node = ClassifiableNode::from_at_rule(at);
            if node.is_variable() || node.is_mixin() {
                violations.extend(check_node(&node, 0, ctx, options));
            }
        }
        Node::Rule(rule) => {
            if rule.selector.contains('@') && rule.selector.contains('(') {
                check_mixin_definition(rule, ctx, options, &mut violations);
            }
        }
    });
    violations
}

/// Checks each parameter of a mixin definition as a standalone statement.
fn check_mixin_definition(
    rule: &Rule,
    ctx: &FileContext<'_>,
    options: &ColorTypesOptions,
    violations: &mut Vec<ColorViolation>,
) {
    for (offset, fragment) in mixin_parameters(&rule.selector) {
        let base = rule.span.offset + offset;
        let parsed = match parse(fragment, Dialect::Less) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(
                    "Skipping mixin parameter `{fragment}` in {}: {err}",
                    ctx.relative_path.display()
                );
                continue;
            }
        };
        parsed.walk(|node| {
            let node = match node {
                Node::AtRule(at) => ClassifiableNode::LessVariable(at),
                Node::Declaration(decl) => ClassifiableNode::Declaration(decl),
                Node::Rule(_) => return,
            };
            violations.extend(check_node(&node, base, ctx, options));
        });
    }
}

fn check_node(
    node: &ClassifiableNode<'_>,
    base: usize,
    ctx: &FileContext<'_>,
    options: &ColorTypesOptions,
) -> Option<ColorViolation> {
    let span = node.span().shifted(base);
    if options.is_exempt(ctx.line_at(span.offset)) {
        trace!("Exempt by exception: {}", node.text());
        return None;
    }

    let kinds = classify(node);
    let verdict = judge(&kinds, options)?;
    let snippet = node.text();
    Some(ColorViolation {
        message: verdict.message(snippet),
        span,
        snippet: snippet.to_string(),
        kinds: verdict.kinds().to_vec(),
    })
}

/// Splits the first parenthesized group of a selector into trimmed,
/// non-empty parameters separated by top-level `,` or `;`.
///
/// Returns each parameter with its byte offset in `selector`.
fn mixin_parameters(selector: &str) -> Vec<(usize, &str)> {
    let Some(open) = selector.find('(') else {
        return Vec::new();
    };
    let bytes = selector.as_bytes();
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut start = open + 1;

    for i in open + 1..bytes.len() {
        let byte = bytes[i];
        if let Some(q) = quote {
            if byte == q && bytes[i - 1] != b'\\' {
                quote = None;
            }
            continue;
        }
        match byte {
            b'"' | b'\'' => quote = Some(byte),
            b'(' => depth += 1,
            b')' if depth == 0 => {
                push_parameter(selector, start, i, &mut params);
                return params;
            }
            b')' => depth -= 1,
            b',' | b';' if depth == 0 => {
                push_parameter(selector, start, i, &mut params);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_parameter(selector, start, bytes.len(), &mut params);
    params
}

fn push_parameter<'a>(
    selector: &'a str,
    start: usize,
    end: usize,
    out: &mut Vec<(usize, &'a str)>,
) {
    let raw = &selector[start..end];
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        let leading = raw.len() - raw.trim_start().len();
        out.push((start + leading, trimmed));
    }
}
