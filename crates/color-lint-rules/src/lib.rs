//! # color-lint-rules
//!
//! Built-in lint rules for color-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CL001 | `color-types` | Restricts color definitions to allowed notations |
//!
//! ## Usage
//!
//! ```ignore
//! use color_lint_core::Analyzer;
//! use color_lint_rules::color_types::{ColorKind, ColorTypes, Mode};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./styles")
//!     .rule(ColorTypes::new().mode(Mode::Require).types([ColorKind::Hex]))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color_types;
mod registry;

pub use color_types::{ColorKind, ColorTypes, Mode, OptionsError};
pub use registry::{all_rules, rules_from_config};

/// Re-export core types for convenience.
pub use color_lint_core::{Rule, Severity, Violation};
