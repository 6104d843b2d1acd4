//! Shared output formatting for lint results.

use anyhow::Result;
use color_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::{NamedSource, Report};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `source_root` is the directory violation paths are relative to; the
/// pretty format reads the stylesheets from there.
pub fn print(result: &LintResult, format: OutputFormat, source_root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, source_root),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!(
            "  {}: {}",
            severity_indicator(violation.severity),
            violation.message
        );
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }
    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} stylesheet(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_pretty(result: &LintResult, source_root: &Path) {
    for violation in &result.violations {
        let path = source_root.join(&violation.location.file);
        match std::fs::read_to_string(&path) {
            Ok(content) => println!("{:?}", report(violation, content)),
            Err(err) => {
                tracing::debug!("Cannot read {} for excerpt: {err}", path.display());
                println!("{violation}");
            }
        }
    }
    print_summary(result);
}

fn report(violation: &Violation, content: String) -> Report {
    let name = violation.location.file.display().to_string();
    Report::new(ViolationDiagnostic::from(violation))
        .with_source_code(NamedSource::new(name, content))
}
