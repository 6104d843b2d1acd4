//! Integration test: file discovery, parsing, and rule dispatch via Analyzer.

use color_lint_core::syntax::Stylesheet;
use color_lint_core::{Analyzer, AnalyzerError, Config, FileContext, Rule, Severity, Violation};
use std::fs;
use std::path::Path;

/// Reports every `!important` declaration.
struct NoImportant;

impl Rule for NoImportant {
    fn name(&self) -> &'static str {
        "no-important"
    }

    fn code(&self) -> &'static str {
        "TEST100"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext, sheet: &Stylesheet) -> Vec<Violation> {
        sheet
            .declarations()
            .into_iter()
            .filter(|decl| decl.important)
            .map(|decl| {
                Violation::new(
                    self.code(),
                    self.name(),
                    self.default_severity(),
                    ctx.location(decl.span),
                    "!important is not allowed",
                )
                .with_snippet(decl.text())
            })
            .collect()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write fixture");
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "src/a.css", "a {\n  color: red !important;\n}\n");
    write(root, "src/b.less", "@x: 1px;\n.b { margin: 0 !important; }\n");
    write(root, "src/c.scss", "$y: 2px;\n.c { padding: 0; }\n");
    write(root, "src/notes.txt", "color: red !important;\n");
    write(root, "node_modules/lib/x.css", "x { color: red !important; }\n");
    dir
}

#[test]
fn discovers_stylesheets_and_skips_excluded_dirs() {
    let dir = project();
    let analyzer = Analyzer::builder()
        .root(dir.path())
        .rule(NoImportant)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");

    assert_eq!(result.files_checked, 3);
    let found: Vec<(String, usize)> = result
        .violations
        .iter()
        .map(|v| (v.location.file.display().to_string(), v.location.line))
        .collect();
    assert_eq!(
        found,
        vec![("src/a.css".to_string(), 2), ("src/b.less".to_string(), 2)]
    );
    assert_eq!(
        result.violations[0].snippet.as_deref(),
        Some("color: red !important")
    );
}

#[test]
fn config_disables_rule_and_overrides_severity() {
    let dir = project();

    let disabled = Config::parse("[rules.no-important]\nenabled = false\n").expect("config");
    let result = Analyzer::builder()
        .root(dir.path())
        .config(disabled)
        .rule(NoImportant)
        .build()
        .expect("build")
        .analyze()
        .expect("analyze");
    assert!(result.violations.is_empty());

    let escalated = Config::parse("[rules.no-important]\nseverity = \"error\"\n").expect("config");
    let result = Analyzer::builder()
        .root(dir.path())
        .config(escalated)
        .rule(NoImportant)
        .build()
        .expect("build")
        .analyze()
        .expect("analyze");
    assert!(result.has_errors());
    assert!(result.violations.iter().all(|v| v.severity == Severity::Error));
}

#[test]
fn parse_errors_are_skipped_unless_fatal() {
    let dir = project();
    write(dir.path(), "src/broken.css", "a {\n  color: red;\n");

    let result = Analyzer::builder()
        .root(dir.path())
        .rule(NoImportant)
        .build()
        .expect("build")
        .analyze()
        .expect("parse errors are warnings by default");
    assert_eq!(result.files_checked, 3);

    let err = Analyzer::builder()
        .root(dir.path())
        .rule(NoImportant)
        .fail_on_parse_error(true)
        .build()
        .expect("build")
        .analyze()
        .expect_err("broken stylesheet should fail");
    assert!(matches!(err, AnalyzerError::Parse { .. }));
}

#[test]
fn single_file_root_is_analyzed_alone() {
    let dir = project();
    let result = Analyzer::builder()
        .root(dir.path().join("src/a.css"))
        .rule(NoImportant)
        .build()
        .expect("build")
        .analyze()
        .expect("analyze");

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].location.file, Path::new("a.css"));
}
