//! # color-lint-core
//!
//! Core framework for stylesheet linting over CSS, Less, and SCSS.
//!
//! This crate provides the foundational traits and types for building
//! stylesheet linters. It includes:
//!
//! - [`syntax`] for parsing stylesheets and tokenizing values
//! - [`Rule`] trait for per-file rules over a parsed [`syntax::Stylesheet`]
//! - [`Analyzer`] for discovering files and orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use color_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./styles")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Stylesheet parsing, value tokenizing, and source search.
pub mod syntax;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use utils::allowance::AllowCheck;
