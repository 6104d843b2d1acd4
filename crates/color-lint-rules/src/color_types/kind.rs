//! Color notation kinds and the per-node set of detected kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color notation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// `#rgb`, `#rrggbb`, `#rrggbbaa`, ...
    Hex,
    /// A CSS color keyword such as `blue`.
    Named,
    /// `rgb(...)`
    Rgb,
    /// `rgba(...)`
    Rgba,
    /// `hsl(...)`
    Hsl,
    /// `hsla(...)`
    Hsla,
    /// `hsv(...)`
    Hsv,
    /// `hsva(...)`
    Hsva,
    /// `argb(...)`
    Argb,
}

impl ColorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Hex,
        Self::Named,
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
        Self::Argb,
    ];

    /// Kinds written as a function call.
    pub const FUNCTIONS: [Self; 7] = [
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
        Self::Argb,
    ];

    /// Lowercase identifier used in configuration and messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Named => "named",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
            Self::Argb => "argb",
        }
    }

    /// Maps an exact function name to its kind.
    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::FUNCTIONS.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown color kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color type `{0}` (expected one of: hex, named, rgb, rgba, hsl, hsla, hsv, hsva, argb)")]
pub struct UnknownColorKind(pub String);

impl FromStr for ColorKind {
    type Err = UnknownColorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownColorKind(s.to_string()))
    }
}

/// Insertion-ordered set of color kinds found in one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorKindSet {
    kinds: Vec<ColorKind>,
}

impl ColorKindSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `kind` unless already present.
    pub fn insert(&mut self, kind: ColorKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    /// Whether `kind` is in the set.
    #[must_use]
    pub fn contains(&self, kind: ColorKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Number of kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Kinds in detection order.
    pub fn iter(&self) -> impl Iterator<Item = ColorKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Kinds in detection order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ColorKind] {
        &self.kinds
    }
}

impl FromIterator<ColorKind> for ColorKindSet {
    fn from_iter<I: IntoIterator<Item = ColorKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ColorKindSet {
    type Item = ColorKind;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ColorKind>>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter().copied()
    }
}

/// Formats kinds as `[k1, k2]`.
#[must_use]
pub fn format_kinds(kinds: &[ColorKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
    format!("[{}]", names.join(", "))
}
