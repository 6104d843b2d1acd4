//! Stylesheet syntax layer.
//!
//! Provides the pieces rules need to inspect stylesheet source:
//!
//! - [`parse`] turns CSS/Less/SCSS text into a [`Stylesheet`] tree of
//!   rules, at-rules, and declarations.
//! - [`parse_value`] tokenizes a declaration value or at-rule parameter
//!   into words, strings, and function calls.
//! - [`style_search`] finds literal substrings in raw source while skipping
//!   comments and strings.

mod parser;
mod search;
mod value;

pub use parser::{parse, AtRule, AtRuleKind, Declaration, Node, ParseError, Rule, Stylesheet};
pub use search::{style_search, Match};
pub use value::{parse_value, walk_values, ValueNode, ValueWalker};

use std::path::Path;

/// Stylesheet language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Plain CSS.
    #[default]
    Css,
    /// Less: `@var: value;` assignments and `.mixin();` calls become at-rules.
    Less,
    /// SCSS: `$var: value;` assignments stay declarations.
    Scss,
}

impl Dialect {
    /// Detects the dialect from a file extension.
    ///
    /// Returns `None` for files that are not stylesheets.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "css" => Some(Self::Css),
            "less" => Some(Self::Less),
            "scss" => Some(Self::Scss),
            _ => None,
        }
    }

    /// Whether `//` starts a comment that runs to the end of the line.
    #[must_use]
    pub fn has_line_comments(self) -> bool {
        matches!(self, Self::Less | Self::Scss)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css => write!(f, "css"),
            Self::Less => write!(f, "less"),
            Self::Scss => write!(f, "scss"),
        }
    }
}

/// Byte range of a node within the text it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span from a start offset and an exclusive end offset.
    #[must_use]
    pub fn between(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            length: end.saturating_sub(start),
        }
    }

    /// Exclusive end offset.
    #[must_use]
    pub fn end(self) -> usize {
        self.offset + self.length
    }

    /// Moves the span forward by `delta` bytes.
    #[must_use]
    pub fn shifted(self, delta: usize) -> Self {
        Self {
            offset: self.offset + delta,
            length: self.length,
        }
    }
}

/// Converts a byte offset into a 1-indexed `(line, column)` pair.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the
/// last position.
#[must_use]
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = text[line_start..offset].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::from_path(Path::new("a/b.css")), Some(Dialect::Css));
        assert_eq!(Dialect::from_path(Path::new("theme.LESS")), Some(Dialect::Less));
        assert_eq!(Dialect::from_path(Path::new("_vars.scss")), Some(Dialect::Scss));
        assert_eq!(Dialect::from_path(Path::new("main.rs")), None);
        assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn line_col_counts_from_one() {
        let text = "a {\n  color: red;\n}";
        assert_eq!(line_col(text, 0), (1, 1));
        assert_eq!(line_col(text, 6), (2, 3));
        assert_eq!(line_col(text, text.len()), (3, 2));
        assert_eq!(line_col(text, 999), (3, 2));
    }

    #[test]
    fn span_helpers() {
        let span = Span::between(4, 10);
        assert_eq!(span.length, 6);
        assert_eq!(span.end(), 10);
        assert_eq!(span.shifted(3), Span { offset: 7, length: 6 });
    }
}
