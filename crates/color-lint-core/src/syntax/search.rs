//! Literal substring search over stylesheet source.

use std::ops::ControlFlow;

/// A single occurrence reported by [`style_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Exclusive byte offset where the match ends.
    pub end: usize,
}

/// Calls `on_match` for every non-overlapping occurrence of `target` in
/// `source` that is not inside a `/* */` comment or a quoted string.
///
/// The callback returns [`ControlFlow::Break`] to stop the search early.
pub fn style_search<F>(source: &str, target: &str, mut on_match: F)
where
    F: FnMut(Match) -> ControlFlow<()>,
{
    if target.is_empty() {
        return;
    }
    let bytes = source.as_bytes();
    let needle = target.as_bytes();
    let mut quote: Option<u8> = None;
    let mut in_comment = false;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];

        if in_comment {
            if bytes[i..].starts_with(b"*/") {
                in_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        if let Some(q) = quote {
            if byte == b'\\' {
                i += 2;
                continue;
            }
            if byte == q {
                quote = None;
            }
            i += 1;
            continue;
        }

        if bytes[i..].starts_with(b"/*") {
            in_comment = true;
            i += 2;
            continue;
        }
        if byte == b'"' || byte == b'\'' {
            quote = Some(byte);
            i += 1;
            continue;
        }

        if bytes[i..].starts_with(needle) {
            let found = Match {
                start: i,
                end: i + needle.len(),
            };
            if on_match(found).is_break() {
                return;
            }
            i += needle.len();
            continue;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(source: &str, target: &str) -> Vec<usize> {
        let mut out = Vec::new();
        style_search(source, target, |m| {
            out.push(m.start);
            ControlFlow::Continue(())
        });
        out
    }

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(starts("color: #fff, #000", "#"), vec![7, 13]);
    }

    #[test]
    fn skips_comments_and_strings() {
        assert_eq!(starts("/* #fff */ content: \"#000\" #abc", "#"), vec![27]);
        assert_eq!(starts("content: '\\'#x' #y", "#"), vec![16]);
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(starts("aaaa", "aa"), vec![0, 2]);
    }

    #[test]
    fn break_stops_search() {
        let mut seen = 0;
        style_search("# # #", "#", |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert_eq!(seen, 1);
    }

    #[test]
    fn empty_target_matches_nothing() {
        assert!(starts("abc", "").is_empty());
    }
}
