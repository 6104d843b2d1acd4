//! Context types for rule execution.

use crate::syntax::{line_col, Dialect, Span};
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Contains the file's source and metadata rules use to position
/// violations and look up the source line of a node.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Stylesheet dialect, detected from the extension.
    pub dialect: Dialect,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            dialect: Dialect::from_path(path).unwrap_or_default(),
            relative_path,
        }
    }

    /// Converts a byte offset into a 1-indexed `(line, column)` pair.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> (usize, usize) {
        line_col(self.content, offset)
    }

    /// Builds a violation location for a node span.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.position_of(span.offset);
        Location::new(self.relative_path.clone(), line, column).with_span(span.offset, span.length)
    }

    /// Returns the full source line containing `offset`, without the newline.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> &'a str {
        let content = self.content;
        let mut offset = offset.min(content.len());
        while !content.is_char_boundary(offset) {
            offset -= 1;
        }
        let start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
        let end = content[offset..]
            .find('\n')
            .map_or(content.len(), |i| offset + i);
        content[start..end].trim_end_matches('\r')
    }
}
