//! Syntax nodes the color classifier accepts.

use color_lint_core::syntax::{AtRule, AtRuleKind, Declaration, Span};

/// A node whose value may define colors.
///
/// The traversal decides which variant a parsed node becomes; the classifier
/// only reads the tag.
#[derive(Debug, Clone, Copy)]
pub enum ClassifiableNode<'a> {
    /// A `prop: value` declaration, including SCSS `$var: value`.
    Declaration(&'a Declaration),
    /// An at-rule that is neither a variable nor a mixin call.
    AtRule(&'a AtRule),
    /// A Less variable assignment such as `@brand: #fff`.
    LessVariable(&'a AtRule),
    /// A Less mixin call such as `.button(#fff)`, serialized as `@button(#fff)`.
    LessMixin(&'a AtRule),
}

impl<'a> ClassifiableNode<'a> {
    /// Tags an at-rule by the kind the parser assigned it.
    #[must_use]
    pub fn from_at_rule(at_rule: &'a AtRule) -> Self {
        match at_rule.kind {
            AtRuleKind::Variable => Self::LessVariable(at_rule),
            AtRuleKind::Mixin => Self::LessMixin(at_rule),
            AtRuleKind::Plain => Self::AtRule(at_rule),
        }
    }

    /// Full serialized node text, used as the violation snippet and as the
    /// hex scan target.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Declaration(decl) => decl.text(),
            Self::AtRule(at) | Self::LessVariable(at) | Self::LessMixin(at) => at.text(),
        }
    }

    /// Value or parameter text handed to the value tokenizer.
    #[must_use]
    pub fn value(&self) -> &'a str {
        match self {
            Self::Declaration(decl) => &decl.value,
            Self::AtRule(at) | Self::LessVariable(at) | Self::LessMixin(at) => &at.params,
        }
    }

    /// Source span of the node, relative to the text it was parsed from.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Declaration(decl) => decl.span,
            Self::AtRule(at) | Self::LessVariable(at) | Self::LessMixin(at) => at.span,
        }
    }

    /// Whether the node is a Less mixin call.
    #[must_use]
    pub fn is_mixin(&self) -> bool {
        matches!(self, Self::LessMixin(_))
    }

    /// Whether the node is a Less variable assignment.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::LessVariable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_lint_core::syntax::{parse, Dialect, Node};

    fn first_child(source: &str) -> Node {
        let sheet = parse(source, Dialect::Less).expect("valid less");
        let mut nodes = sheet.nodes;
        let first = nodes.remove(0);
        match first {
            Node::Rule(mut rule) => rule.nodes.remove(0),
            other => other,
        }
    }

    #[test]
    fn tags_follow_parser_kind() {
        let node = first_child("@brand: #fff;");
        let Node::AtRule(at) = &node else {
            panic!("expected at-rule");
        };
        let tagged = ClassifiableNode::from_at_rule(at);
        assert!(tagged.is_variable());
        assert!(!tagged.is_mixin());
        assert_eq!(tagged.text(), "@brand: #fff");
        assert_eq!(tagged.value(), "#fff");
    }

    #[test]
    fn mixin_call_exposes_rewritten_text() {
        let node = first_child("div { .button(#123); }");
        let Node::AtRule(at) = &node else {
            panic!("expected at-rule");
        };
        let tagged = ClassifiableNode::from_at_rule(at);
        assert!(tagged.is_mixin());
        assert_eq!(tagged.text(), "@button(#123)");
        assert_eq!(tagged.value(), "(#123)");
    }

    #[test]
    fn declaration_exposes_value() {
        let node = first_child("div { color: blue !important; }");
        let Node::Declaration(decl) = &node else {
            panic!("expected declaration");
        };
        let tagged = ClassifiableNode::Declaration(decl);
        assert_eq!(tagged.value(), "blue");
        assert_eq!(tagged.text(), "color: blue !important");
        assert_eq!(tagged.span().offset, 6);
    }
}
