//! Check command handler - Structural and syntax validation of the corpus

use std::fmt::Write;

use crate::cli::CheckArgs;
use crate::commands::{to_json, CommandContext};
use crate::error::{CorpusError, Result};
use crate::validate::{Severity, ValidationReport, Validator};

/// Run the check command
///
/// Returns the rendered report on success. When the report has errors the
/// same rendering is carried in [`CorpusError::ValidationFailed`] so the
/// caller can still print it.
pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> Result<String> {
    let corpus = ctx.open_corpus()?;

    let mut options = ctx.config.check_options();
    if let Some(name) = &args.lang {
        options.lang = Some(ctx.parse_lang(name)?);
    }
    if args.no_syntax {
        options.syntax = false;
    }
    if args.allow_empty {
        options.allow_empty = true;
    }
    if let Some(max) = args.max_issues {
        options.max_issues_per_file = max;
    }

    let report = Validator::new(options).run(&corpus)?;

    let mut value = to_json(&report)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("ok".to_string(), report.is_ok().into());
        obj.insert("errors".to_string(), report.error_count().into());
        obj.insert("warnings".to_string(), report.warning_count().into());
    }

    let output = ctx.render(&value, || format_report_text(&report, ctx.verbose))?;

    if report.is_ok() {
        Ok(output)
    } else {
        Err(CorpusError::ValidationFailed {
            errors: report.error_count(),
            report: output,
        })
    }
}

/// Human-readable rendering of a validation report
pub fn format_report_text(report: &ValidationReport, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "corpus: {}", report.root);
    let _ = writeln!(
        out,
        "checked {} fixture(s) in {} language(s)",
        report.files_checked,
        report.languages.len()
    );

    if verbose {
        for (lang, count) in &report.languages {
            let _ = writeln!(out, "  {:<12} {}", lang, count);
        }
    }

    for issue in &report.issues {
        let label = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        let _ = writeln!(
            out,
            "{} {} [{}] {}",
            label,
            issue.path,
            issue.check.name(),
            issue.message
        );
        if let Some(syntax) = &issue.syntax {
            for s in &syntax.issues {
                let _ = writeln!(out, "      {}:{} {:?} {}", s.line, s.column, s.kind, s.node);
            }
            if syntax.is_truncated() {
                let _ = writeln!(
                    out,
                    "      ... {} more",
                    syntax.error_count - syntax.issues.len()
                );
            }
        }
    }

    if report.is_ok() {
        let _ = writeln!(out, "ok ({} warning(s))", report.warning_count());
    } else {
        let _ = writeln!(
            out,
            "failed: {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
    }
    out
}
