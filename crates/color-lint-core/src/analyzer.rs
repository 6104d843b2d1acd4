//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::syntax::{self, line_col, Dialect};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the directory tree.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Error parsing a stylesheet.
    #[error("Parse error in {}:{line}:{column}: {message}", path.display())]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Line of the offending token (1-indexed).
        line: usize,
        /// Column of the offending token (1-indexed).
        column: usize,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or a
    /// glob pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        let mut include_patterns = self.include_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
            include_patterns.extend(config.analyzer.include.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend([
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
            ]);
        }

        let exclude = compile_patterns(&exclude_patterns)?;
        let include = compile_patterns(&include_patterns)?;
        let respect_gitignore = self
            .config
            .as_ref()
            .map_or(true, |c| c.analyzer.respect_gitignore);

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude,
            include,
            respect_gitignore,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>, AnalyzerError> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(AnalyzerError::from))
        .collect()
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    respect_gitignore: bool,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes all stylesheets under the root and returns the results.
    ///
    /// When the root is a single file, only that file is analyzed.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, a file cannot be read, or a
    /// file fails to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} stylesheets to analyze", files.len());

        for file_path in &files {
            let content = std::fs::read_to_string(file_path)?;
            match self.check_source(file_path, &content) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(err @ AnalyzerError::Parse { .. }) => {
                    warn!("{err}");
                    if self.fail_on_parse_error {
                        return Err(err);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Parses `content` as the stylesheet at `path` and runs every enabled
    /// rule over it.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the source is not a valid
    /// stylesheet in the dialect implied by the extension.
    pub fn check_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let dialect = Dialect::from_path(path).unwrap_or_default();
        let sheet = syntax::parse(content, dialect).map_err(|e| {
            let (line, column) = line_col(content, e.offset());
            AnalyzerError::Parse {
                path: path.to_path_buf(),
                line,
                column,
                message: e.to_string(),
            }
        })?;

        let base = if self.root.is_file() {
            self.root.parent().unwrap_or(&self.root)
        } else {
            &self.root
        };
        let ctx = FileContext::new(path, content, base);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(&ctx, &sheet);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all stylesheet files to analyze, sorted by path.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || Dialect::from_path(path).is_none() {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            if !self.should_include(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path matches any exclude pattern.
    fn should_exclude(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(rel))
    }

    /// Checks if a path is selected by the include patterns (all paths when
    /// there are none).
    fn should_include(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.include.iter().any(|pattern| pattern.matches_path(rel))
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }
}
