//! Detects which color notations a node uses.
//!
//! Two passes run over the node and their results are merged:
//!
//! 1. The value is tokenized. Color function calls and color keywords are
//!    recorded wherever they appear; a top-level word starting with `#` is
//!    checked as a hex literal.
//! 2. The full node text is searched for `#` outside comments and strings.
//!    A match counts only when it follows `:`, `,`, or whitespace (or `(` in
//!    a mixin call), which keeps selectors such as `:host(#cab)` and
//!    interpolation out. The first accepted hex literal ends the search.

use super::kind::{ColorKind, ColorKindSet};
use super::names::is_named_color;
use super::node::ClassifiableNode;
use color_lint_core::syntax::{parse_value, style_search, walk_values, ValueNode};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::ControlFlow;

#[allow(clippy::expect_used)]
static HEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Za-z]+").expect("valid hex literal pattern"));

/// Returns the color kinds used by `node`, in detection order.
///
/// Never fails: text that does not tokenize cleanly yields fewer (or no)
/// kinds.
#[must_use]
pub fn classify(node: &ClassifiableNode<'_>) -> ColorKindSet {
    let mut kinds = ColorKindSet::new();
    scan_tokens(node.value(), &mut kinds);
    if has_hex_literal(node) {
        kinds.insert(ColorKind::Hex);
    }
    kinds
}

fn scan_tokens(value: &str, kinds: &mut ColorKindSet) {
    let tokens = parse_value(value);
    let mut walker = walk_values(&tokens);
    while let Some(token) = walker.next() {
        match token {
            ValueNode::Function { name, .. } => {
                if let Some(kind) = ColorKind::from_function_name(name) {
                    kinds.insert(kind);
                }
            }
            ValueNode::Word { value } if is_named_color(value) => {
                kinds.insert(ColorKind::Named);
            }
            // Top level only: `argb(#000000)` is argb, not argb and hex.
            ValueNode::Word { value } if walker.depth() == 0 && HEX_LITERAL.is_match(value) => {
                kinds.insert(ColorKind::Hex);
            }
            _ => {}
        }
    }
}

fn has_hex_literal(node: &ClassifiableNode<'_>) -> bool {
    let text = node.text();
    let mut found = false;
    style_search(text, "#", |m| {
        let Some(before) = text[..m.start].chars().next_back() else {
            return ControlFlow::Continue(());
        };
        let accepted = (node.is_mixin() && before == '(')
            || before == ':'
            || before == ','
            || before.is_whitespace();
        if accepted && HEX_LITERAL.is_match(&text[m.start..]) {
            found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_lint_core::syntax::{parse, Dialect, Node, Stylesheet};

    /// Classifies every declaration and at-rule in `source`, merging results.
    fn kinds_in(source: &str, dialect: Dialect) -> Vec<ColorKind> {
        let sheet = parse(source, dialect).expect("valid stylesheet");
        merged(&sheet)
    }

    fn merged(sheet: &Stylesheet) -> Vec<ColorKind> {
        let mut all = ColorKindSet::new();
        sheet.walk(|node| {
            let tagged = match node {
                Node::Declaration(decl) => ClassifiableNode::Declaration(decl),
                Node::AtRule(at) => ClassifiableNode::from_at_rule(at),
                Node::Rule(_) => return,
            };
            for kind in &classify(&tagged) {
                all.insert(kind);
            }
        });
        let mut kinds = all.as_slice().to_vec();
        kinds.sort();
        kinds
    }

    fn css(source: &str) -> Vec<ColorKind> {
        kinds_in(source, Dialect::Css)
    }

    fn less(source: &str) -> Vec<ColorKind> {
        kinds_in(source, Dialect::Less)
    }

    #[test]
    fn single_declarations() {
        assert_eq!(css("a { color: purple }"), vec![ColorKind::Named]);
        assert_eq!(css("a { color: rgb(0, 0, 0) }"), vec![ColorKind::Rgb]);
        assert_eq!(css("a { color: #000000 }"), vec![ColorKind::Hex]);
        assert_eq!(css("a { color: argb(#000000) }"), vec![ColorKind::Argb]);
    }

    #[test]
    fn every_kind_is_detected_alone() {
        let samples = [
            ("#000", ColorKind::Hex),
            ("blue", ColorKind::Named),
            ("rgb(0, 0, 0)", ColorKind::Rgb),
            ("rgba(0, 0, 0, 0)", ColorKind::Rgba),
            ("hsl(0, 0%, 0%)", ColorKind::Hsl),
            ("hsla(0, 0%, 0%, 0)", ColorKind::Hsla),
            ("hsv(0, 0%, 0%)", ColorKind::Hsv),
            ("hsva(0, 0%, 0%, 0)", ColorKind::Hsva),
            ("argb(#000000)", ColorKind::Argb),
        ];
        for (value, kind) in samples {
            for dialect in [Dialect::Css, Dialect::Less, Dialect::Scss] {
                let source = format!("div {{ color: {value}; }}");
                assert_eq!(kinds_in(&source, dialect), vec![kind], "{value} as {dialect}");
            }
        }
    }

    #[test]
    fn several_declarations_merge() {
        assert_eq!(
            css(".styles {color: rgb(0, 0, 0); background-color: hsva(0, 0, 0, 0);}"),
            vec![ColorKind::Rgb, ColorKind::Hsva]
        );
        assert_eq!(
            css(".styles {color: rgb(0, 0, 0); background-color: #000000;}"),
            vec![ColorKind::Hex, ColorKind::Rgb]
        );
        assert_eq!(
            css(".styles {color: blue; background-color: #000000;}"),
            vec![ColorKind::Hex, ColorKind::Named]
        );
        assert_eq!(
            css(".styles {color: invalid-color; background-color: #000000;}"),
            vec![ColorKind::Hex]
        );
    }

    #[test]
    fn variable_references_are_not_colors() {
        assert!(css("div { color: var(--my-var); }").is_empty());
        assert!(css("div { --my-var: var(--other-var); }").is_empty());
        assert!(less("div { color: @myVar; }").is_empty());
        assert!(less("@myVar: @otherVar;").is_empty());
        assert!(kinds_in("div { color: $myVar; }", Dialect::Scss).is_empty());
        assert!(kinds_in("$myVar: $otherVar", Dialect::Scss).is_empty());
    }

    #[test]
    fn hash_in_selector_is_not_hex() {
        assert!(css(":host(#cab) { text-align: center; }").is_empty());
        assert!(less(":host(#cab) { text-align: center; }").is_empty());
    }

    #[test]
    fn mixin_call_argument_is_hex() {
        let source = "
            .myMixin(@colorVal) {
                color: @colorVal;
            }

            div {
                .myMixin(#123);
            }";
        assert_eq!(less(source), vec![ColorKind::Hex]);
    }

    #[test]
    fn paren_only_counts_for_mixins() {
        let sheet = parse("a { filter: drop(#123); }", Dialect::Css).expect("valid css");
        assert!(merged(&sheet).is_empty());
    }

    #[test]
    fn hash_at_start_of_text_is_skipped() {
        assert!(css("a { #abc: 1 }").is_empty());
    }

    #[test]
    fn hex_in_comment_or_string_is_ignored() {
        assert!(css("a { content: \"#fff\"; }").is_empty());
        assert!(css("a { margin: 0 /* #fff */; }").is_empty());
    }

    #[test]
    fn interpolation_is_not_hex() {
        assert!(kinds_in("a { width: #{$w}; }", Dialect::Scss).is_empty());
    }

    #[test]
    fn several_hex_literals_record_hex_once() {
        assert_eq!(
            css("a { background: linear-gradient(#fff, #000); }"),
            vec![ColorKind::Hex]
        );
    }

    #[test]
    fn detection_order_is_stable() {
        let sheet = parse("a { border: blue #000; }", Dialect::Css).expect("valid css");
        let decl = sheet.declarations()[0];
        let node = ClassifiableNode::Declaration(decl);
        let first = classify(&node);
        assert_eq!(first.as_slice(), &[ColorKind::Named, ColorKind::Hex]);
        assert_eq!(classify(&node), first);
    }
}
