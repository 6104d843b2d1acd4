//! Stylesheet parser producing a tree of rules, at-rules, and declarations.
//!
//! The parser is deliberately shallow: it splits source text into
//! statements and blocks and records the raw text of each node. Values and
//! selectors are kept as strings; [`super::parse_value`] tokenizes values
//! on demand.

use super::{Dialect, Span};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Errors produced while parsing a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{` without a matching `}`.
    #[error("unclosed block opened at byte {offset}")]
    UnclosedBlock {
        /// Offset of the opening brace.
        offset: usize,
    },

    /// A quoted string that runs to the end of input.
    #[error("unclosed string starting at byte {offset}")]
    UnclosedString {
        /// Offset of the opening quote.
        offset: usize,
    },

    /// A `/*` comment without `*/`.
    #[error("unclosed comment starting at byte {offset}")]
    UnclosedComment {
        /// Offset of the comment start.
        offset: usize,
    },

    /// A `}` with no open block.
    #[error("unexpected '}}' at byte {offset}")]
    UnexpectedCloseBrace {
        /// Offset of the stray brace.
        offset: usize,
    },

    /// A statement that is neither a declaration, an at-rule, nor a mixin call.
    #[error("unknown word `{word}` at byte {offset}")]
    UnknownWord {
        /// First word of the statement.
        word: String,
        /// Offset of the statement.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset the error points at.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::UnclosedBlock { offset }
            | Self::UnclosedString { offset }
            | Self::UnclosedComment { offset }
            | Self::UnexpectedCloseBrace { offset }
            | Self::UnknownWord { offset, .. } => *offset,
        }
    }
}

/// A parsed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level nodes in document order.
    pub nodes: Vec<Node>,
    /// Dialect the source was parsed as.
    pub dialect: Dialect,
}

impl Stylesheet {
    /// Visits every node depth-first in document order.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node),
    {
        walk_nodes(&self.nodes, &mut visit);
    }

    /// All declarations in document order.
    #[must_use]
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        self.walk(|node| {
            if let Node::Declaration(decl) = node {
                out.push(decl);
            }
        });
        out
    }
}

fn walk_nodes<'a, F>(nodes: &'a [Node], visit: &mut F)
where
    F: FnMut(&'a Node),
{
    for node in nodes {
        visit(node);
        walk_nodes(node.children(), visit);
    }
}

/// A node in the stylesheet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Selector block.
    Rule(Rule),
    /// `@`-construct, including Less variables and mixin calls.
    AtRule(AtRule),
    /// `property: value` pair.
    Declaration(Declaration),
}

impl Node {
    /// Source span of the node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Rule(rule) => rule.span,
            Self::AtRule(at_rule) => at_rule.span,
            Self::Declaration(decl) => decl.span,
        }
    }

    /// Child nodes, empty for statements.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Rule(rule) => &rule.nodes,
            Self::AtRule(at_rule) => at_rule.nodes.as_deref().unwrap_or_default(),
            Self::Declaration(_) => &[],
        }
    }
}

/// A selector block such as `div { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector text, trimmed. Starts at `span.offset`.
    pub selector: String,
    /// Block contents.
    pub nodes: Vec<Node>,
    /// Span from the selector through the closing brace.
    pub span: Span,
}

/// Shape of an at-rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtRuleKind {
    /// A regular at-rule (`@media`, `@import`, `@include`, ...).
    Plain,
    /// A Less variable assignment (`@name: value`).
    Variable,
    /// A Less mixin call (`.name(args)`).
    Mixin,
}

/// An at-rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Name without the leading `@` (or mixin prefix).
    pub name: String,
    /// Parameter text. For variables this is the assigned value; for mixin
    /// calls it includes the parentheses.
    pub params: String,
    /// Which at-rule shape this is.
    pub kind: AtRuleKind,
    /// Block contents, if the at-rule has a block.
    pub nodes: Option<Vec<Node>>,
    /// Source span.
    pub span: Span,
    text: String,
}

impl AtRule {
    /// Serialized text of the whole node.
    ///
    /// Mixin calls render in at-rule form, so `.m(#123)` becomes `@m(#123)`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, e.g. `color` or `$brand`.
    pub prop: String,
    /// Raw text between property and value, e.g. `": "`.
    pub between: String,
    /// Value text without `!important`.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
    /// Source span.
    pub span: Span,
    text: String,
}

impl Declaration {
    /// Serialized text of the whole declaration, e.g. `color: #000`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parses stylesheet source text.
///
/// # Errors
///
/// Returns a [`ParseError`] on unbalanced braces, unterminated strings or
/// comments, and statements that cannot be classified.
pub fn parse(source: &str, dialect: Dialect) -> Result<Stylesheet, ParseError> {
    let mut parser = Parser {
        src: source,
        bytes: source.as_bytes(),
        pos: 0,
        dialect,
        line_comments: Vec::new(),
    };
    let nodes = parser.parse_nodes(None)?;
    Ok(Stylesheet { nodes, dialect })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    dialect: Dialect,
    /// `//` comments inside the statement being scanned.
    line_comments: Vec<Range<usize>>,
}

impl Parser<'_> {
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn parse_nodes(&mut self, open: Option<usize>) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.skip_trivia()?;
            let Some(byte) = self.peek(0) else {
                return match open {
                    Some(offset) => Err(ParseError::UnclosedBlock { offset }),
                    None => Ok(nodes),
                };
            };
            match byte {
                b'}' => {
                    if open.is_some() {
                        self.pos += 1;
                        return Ok(nodes);
                    }
                    return Err(ParseError::UnexpectedCloseBrace { offset: self.pos });
                }
                b';' => self.pos += 1,
                _ => nodes.push(self.parse_node()?),
            }
        }
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        let stop = self.scan_statement()?;
        let (header_end, header) = self.statement_text(start, self.pos);

        if stop == Stop::OpenBrace {
            let brace = self.pos;
            self.pos += 1;
            let nodes = self.parse_nodes(Some(brace))?;
            let span = Span::between(start, self.pos);
            return Ok(self.block_node(&header, nodes, span));
        }

        if stop == Stop::Semicolon {
            self.pos += 1;
        }
        self.statement_node(Span::between(start, header_end), &header)
    }

    /// Text of the statement in `start..end` without its `//` comments,
    /// plus the offset just past its last significant byte.
    fn statement_text(&self, start: usize, end: usize) -> (usize, String) {
        let mut segments = Vec::with_capacity(self.line_comments.len() + 1);
        let mut cursor = start;
        for comment in &self.line_comments {
            segments.push(cursor..comment.start);
            cursor = comment.end;
        }
        segments.push(cursor..end);

        let content_end = segments
            .iter()
            .rev()
            .find_map(|seg| {
                let trimmed = self.src[seg.clone()].trim_end();
                (!trimmed.is_empty()).then_some(seg.start + trimmed.len())
            })
            .unwrap_or(start);

        let mut text = String::new();
        for seg in segments {
            if seg.start >= content_end {
                break;
            }
            text.push_str(&self.src[seg.start..seg.end.min(content_end)]);
        }
        (content_end, text)
    }

    fn block_node(&self, header: &str, nodes: Vec<Node>, span: Span) -> Node {
        match header.strip_prefix('@') {
            Some(rest) => {
                let (name, params) = split_at_rule_name(rest);
                Node::AtRule(AtRule {
                    name: name.to_string(),
                    params: params.to_string(),
                    kind: AtRuleKind::Plain,
                    nodes: Some(nodes),
                    span,
                    text: self.src[span.offset..span.end()].to_string(),
                })
            }
            None => Node::Rule(Rule {
                selector: header.to_string(),
                nodes,
                span,
            }),
        }
    }

    fn statement_node(&self, span: Span, text: &str) -> Result<Node, ParseError> {
        if let Some(rest) = text.strip_prefix('@') {
            if self.dialect == Dialect::Less {
                if let Some((name, params)) = split_less_variable(rest) {
                    return Ok(Node::AtRule(AtRule {
                        name: name.to_string(),
                        params: params.to_string(),
                        kind: AtRuleKind::Variable,
                        nodes: None,
                        span,
                        text: text.to_string(),
                    }));
                }
            }
            let (name, params) = split_at_rule_name(rest);
            return Ok(Node::AtRule(AtRule {
                name: name.to_string(),
                params: params.to_string(),
                kind: AtRuleKind::Plain,
                nodes: None,
                span,
                text: text.to_string(),
            }));
        }

        if self.dialect == Dialect::Less {
            if let Some((name, params)) = split_mixin_call(text) {
                return Ok(Node::AtRule(AtRule {
                    text: format!("@{name}{params}"),
                    name: name.to_string(),
                    params: params.to_string(),
                    kind: AtRuleKind::Mixin,
                    nodes: None,
                    span,
                }));
            }
        }

        if let Some(colon) = find_top_level(text, b':') {
            return Ok(Node::Declaration(declaration(text, colon, span)));
        }

        Err(ParseError::UnknownWord {
            word: text.split_whitespace().next().unwrap_or(text).to_string(),
            offset: span.offset,
        })
    }

    /// Skips whitespace and comments between statements.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        while let Some(byte) = self.peek(0) {
            if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else if byte == b'/' && self.peek(1) == Some(b'*') {
                self.skip_block_comment()?;
            } else if byte == b'/' && self.peek(1) == Some(b'/') && self.dialect.has_line_comments()
            {
                self.skip_line_comment();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Advances to the byte that ends the current statement.
    fn scan_statement(&mut self) -> Result<Stop, ParseError> {
        self.line_comments.clear();
        let mut depth = 0usize;
        while let Some(byte) = self.peek(0) {
            match byte {
                b'"' | b'\'' => {
                    self.skip_string(byte)?;
                    continue;
                }
                b'\\' => {
                    self.pos = (self.pos + 2).min(self.bytes.len());
                    continue;
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    self.skip_block_comment()?;
                    continue;
                }
                b'/' if depth == 0
                    && self.peek(1) == Some(b'/')
                    && self.dialect.has_line_comments() =>
                {
                    let comment_start = self.pos;
                    self.skip_line_comment();
                    self.line_comments.push(comment_start..self.pos);
                    continue;
                }
                b'#' | b'@' if self.peek(1) == Some(b'{') => {
                    self.skip_interpolation()?;
                    continue;
                }
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                b';' if depth == 0 => return Ok(Stop::Semicolon),
                b'{' if depth == 0 => return Ok(Stop::OpenBrace),
                b'}' if depth == 0 => return Ok(Stop::CloseBrace),
                _ => {}
            }
            self.pos += 1;
        }
        Ok(Stop::Eof)
    }

    fn skip_string(&mut self, quote: u8) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        while let Some(byte) = self.peek(0) {
            if byte == b'\\' {
                self.pos += 2;
            } else if byte == quote {
                self.pos += 1;
                return Ok(());
            } else {
                self.pos += 1;
            }
        }
        self.pos = self.bytes.len();
        Err(ParseError::UnclosedString { offset: start })
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        match self.src[start + 2..].find("*/") {
            Some(rel) => {
                self.pos = start + 2 + rel + 2;
                Ok(())
            }
            None => Err(ParseError::UnclosedComment { offset: start }),
        }
    }

    fn skip_line_comment(&mut self) {
        self.pos = self.src[self.pos..]
            .find('\n')
            .map_or(self.bytes.len(), |rel| self.pos + rel + 1);
    }

    /// Skips `#{...}` / `@{...}` including nested braces.
    fn skip_interpolation(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 2;
        let mut depth = 1usize;
        while let Some(byte) = self.peek(0) {
            match byte {
                b'"' | b'\'' => {
                    self.skip_string(byte)?;
                    continue;
                }
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }
        Err(ParseError::UnclosedBlock { offset: start + 1 })
    }
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Splits `name params` after the leading `@`.
fn split_at_rule_name(rest: &str) -> (&str, &str) {
    let end = rest
        .find(|c: char| c.is_whitespace() || matches!(c, '(' | '"' | '\'' | '{' | ';'))
        .unwrap_or(rest.len());
    (&rest[..end], rest[end..].trim())
}

/// Recognizes `name: value` after the leading `@` of a Less variable.
fn split_less_variable(rest: &str) -> Option<(&str, &str)> {
    let name_len = rest.bytes().take_while(|b| is_ident_byte(*b)).count();
    if name_len == 0 {
        return None;
    }
    let after = rest[name_len..].trim_start().strip_prefix(':')?;
    Some((&rest[..name_len], after.trim()))
}

/// Recognizes a Less mixin call such as `.mixin(#123)` or `#ns.mixin();`.
fn split_mixin_call(text: &str) -> Option<(&str, &str)> {
    let mut bytes = text.bytes();
    if !matches!(bytes.next(), Some(b'.' | b'#')) || bytes.next() == Some(b'{') {
        return None;
    }
    let head_end = text.find('(').unwrap_or(text.len());
    let head = &text[..head_end];
    if head.contains(':') {
        return None;
    }
    let name = head[1..].trim();
    if name.is_empty() {
        return None;
    }
    Some((name, &text[head_end..]))
}

/// Finds the first `target` byte outside strings, parentheses, and interpolation.
fn find_top_level(text: &str, target: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if let Some(q) = quote {
            if byte == b'\\' {
                i += 1;
            } else if byte == q {
                quote = None;
            }
        } else {
            match byte {
                b'"' | b'\'' => quote = Some(byte),
                b'(' | b'[' | b'{' => depth += 1,
                b')' | b']' | b'}' => depth = depth.saturating_sub(1),
                _ if byte == target && depth == 0 => return Some(i),
                _ => {}
            }
        }
        i += 1;
    }
    None
}

fn declaration(text: &str, colon: usize, span: Span) -> Declaration {
    let prop = text[..colon].trim_end();
    let after_colon = &text[colon + 1..];
    let value_start = colon + 1 + (after_colon.len() - after_colon.trim_start().len());
    let (value, important) = strip_important(&text[value_start..]);

    Declaration {
        prop: prop.to_string(),
        between: text[prop.len()..value_start].to_string(),
        value: value.to_string(),
        important,
        span,
        text: text.to_string(),
    }
}

fn strip_important(value: &str) -> (&str, bool) {
    let trimmed = value.trim_end();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(head) = lower.strip_suffix("important") {
        let head = head.trim_end();
        if let Some(without_bang) = head.strip_suffix('!') {
            return (trimmed[..without_bang.len()].trim_end(), true);
        }
    }
    (trimmed, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_css(source: &str) -> Stylesheet {
        parse(source, Dialect::Css).expect("valid css")
    }

    fn parse_less(source: &str) -> Stylesheet {
        parse(source, Dialect::Less).expect("valid less")
    }

    fn at_rules(sheet: &Stylesheet) -> Vec<&AtRule> {
        let mut out = Vec::new();
        sheet.walk(|node| {
            if let Node::AtRule(at_rule) = node {
                out.push(at_rule);
            }
        });
        out
    }

    fn rules(sheet: &Stylesheet) -> Vec<&Rule> {
        let mut out = Vec::new();
        sheet.walk(|node| {
            if let Node::Rule(rule) = node {
                out.push(rule);
            }
        });
        out
    }

    #[test]
    fn parses_declarations_inside_rules() {
        let sheet = parse_css("div { color: #000; background:rgb(0, 0, 0) }");
        let decls = sheet.declarations();
        assert_eq!(decls.len(), 2);

        assert_eq!(decls[0].prop, "color");
        assert_eq!(decls[0].between, ": ");
        assert_eq!(decls[0].value, "#000");
        assert_eq!(decls[0].text(), "color: #000");

        assert_eq!(decls[1].between, ":");
        assert_eq!(decls[1].text(), "background:rgb(0, 0, 0)");
        assert_eq!(rules(&sheet)[0].selector, "div");
    }

    #[test]
    fn declaration_span_points_at_source() {
        let source = "a {\n  color: blue;\n}";
        let sheet = parse_css(source);
        let decl = sheet.declarations()[0];
        assert_eq!(&source[decl.span.offset..decl.span.end()], "color: blue");
    }

    #[test]
    fn strips_important() {
        let sheet = parse_css("a { color: red ! IMPORTANT; }");
        let decl = sheet.declarations()[0];
        assert_eq!(decl.value, "red");
        assert!(decl.important);
        assert_eq!(decl.text(), "color: red ! IMPORTANT");
    }

    #[test]
    fn less_variable_assignment_is_variable_at_rule() {
        let sheet = parse_less("@myVar: #000000;");
        let at_rules = at_rules(&sheet);
        assert_eq!(at_rules.len(), 1);
        assert_eq!(at_rules[0].kind, AtRuleKind::Variable);
        assert_eq!(at_rules[0].name, "myVar");
        assert_eq!(at_rules[0].params, "#000000");
        assert_eq!(at_rules[0].text(), "@myVar: #000000");
        assert!(sheet.declarations().is_empty());
    }

    #[test]
    fn css_treats_variable_syntax_as_plain_at_rule() {
        let sheet = parse_css("@my-color: blue");
        let at_rule = at_rules(&sheet)[0];
        assert_eq!(at_rule.kind, AtRuleKind::Plain);
        assert_eq!(at_rule.name, "my-color:");
        assert_eq!(at_rule.params, "blue");
    }

    #[test]
    fn less_mixin_call_renders_as_at_rule() {
        let sheet = parse_less("div {\n  .myMixin(#123, #123456);\n  .other;\n}");
        let at_rules = at_rules(&sheet);
        assert_eq!(at_rules.len(), 2);
        assert_eq!(at_rules[0].kind, AtRuleKind::Mixin);
        assert_eq!(at_rules[0].name, "myMixin");
        assert_eq!(at_rules[0].params, "(#123, #123456)");
        assert_eq!(at_rules[0].text(), "@myMixin(#123, #123456)");
        assert_eq!(at_rules[1].text(), "@other");
    }

    #[test]
    fn less_mixin_definition_is_a_rule() {
        let sheet = parse_less(".mixin-definition(@my-color: blue) {}");
        let rules = rules(&sheet);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".mixin-definition(@my-color: blue)");
        assert!(rules[0].nodes.is_empty());
    }

    #[test]
    fn scss_variable_is_declaration() {
        let sheet = parse("$myVar: $otherVar", Dialect::Scss).expect("valid scss");
        let decl = sheet.declarations()[0];
        assert_eq!(decl.prop, "$myVar");
        assert_eq!(decl.value, "$otherVar");
    }

    #[test]
    fn nested_blocks_walk_in_document_order() {
        let sheet = parse_css("@media print { a { color: red; } } b { color: blue; }");
        let mut seen = Vec::new();
        sheet.walk(|node| {
            seen.push(match node {
                Node::Rule(rule) => format!("rule {}", rule.selector),
                Node::AtRule(at_rule) => format!("at {}", at_rule.name),
                Node::Declaration(decl) => format!("decl {}", decl.value),
            });
        });
        assert_eq!(
            seen,
            vec!["at media", "rule a", "decl red", "rule b", "decl blue"]
        );
    }

    #[test]
    fn selector_with_hash_inside_parens() {
        let sheet = parse_css(":host(#cab) { text-align: center; }");
        assert_eq!(rules(&sheet)[0].selector, ":host(#cab)");
        assert_eq!(sheet.declarations()[0].value, "center");
    }

    #[test]
    fn skips_comments_and_respects_strings() {
        let source = "/* a; b { */\na { content: \"x; }\"; /* c */ color: red; }";
        let sheet = parse_css(source);
        let decls = sheet.declarations();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value, "\"x; }\"");
        assert_eq!(decls[1].value, "red");
    }

    #[test]
    fn line_comments_only_in_preprocessors() {
        let sheet = parse_less("// @x: red;\na { color: blue; }");
        assert!(at_rules(&sheet).is_empty());

        let sheet = parse_css("a { background: url(//cdn.example.com/x.png); }");
        assert_eq!(
            sheet.declarations()[0].value,
            "url(//cdn.example.com/x.png)"
        );
    }

    #[test]
    fn trailing_line_comment_is_not_part_of_value() {
        let source = "a {\n  color: red // was #fff\n}";
        let sheet = parse_less(source);
        let decl = sheet.declarations()[0];
        assert_eq!(decl.value, "red");
        assert_eq!(decl.text(), "color: red");
        assert_eq!(&source[decl.span.offset..decl.span.end()], "color: red");

        let sheet = parse("a {\n  margin: 0 // old #fff\n}", Dialect::Scss).expect("valid scss");
        assert_eq!(sheet.declarations()[0].text(), "margin: 0");
    }

    #[test]
    fn line_comment_inside_statement_is_dropped() {
        let sheet = parse_less("@brand: // primary #fff\n  @blue;");
        let at_rule = at_rules(&sheet)[0];
        assert_eq!(at_rule.kind, AtRuleKind::Variable);
        assert_eq!(at_rule.params, "@blue");
        assert_eq!(at_rule.text(), "@brand:   @blue");
    }

    #[test]
    fn interpolation_does_not_open_block() {
        let sheet = parse("$side: left;\n.a-#{$side} { margin: 0; }", Dialect::Scss)
            .expect("valid scss");
        assert_eq!(rules(&sheet)[0].selector, ".a-#{$side}");
    }

    #[test]
    fn reports_structural_errors() {
        assert_eq!(
            parse("a { color: red;", Dialect::Css),
            Err(ParseError::UnclosedBlock { offset: 2 })
        );
        assert_eq!(
            parse("a { color: red; } }", Dialect::Css),
            Err(ParseError::UnexpectedCloseBrace { offset: 18 })
        );
        assert!(matches!(
            parse("a { content: \"oops }", Dialect::Css),
            Err(ParseError::UnclosedString { .. })
        ));
        assert!(matches!(
            parse("/* never closed", Dialect::Css),
            Err(ParseError::UnclosedComment { offset: 0 })
        ));
    }

    #[test]
    fn bare_word_is_unknown() {
        let err = parse("dark", Dialect::Less).expect_err("bare word");
        assert_eq!(
            err,
            ParseError::UnknownWord {
                word: "dark".to_string(),
                offset: 0
            }
        );
        assert_eq!(err.offset(), 0);
    }
}
