// src/cli/handlers.rs
use crate::config::Config;
use crate::error::ReportError;
use crate::exit::LintpostExit;
use crate::ingest;
use crate::reporting::{faq, table::StylishFormatter, ReportComposer, ReportMode};
use crate::summary::{self, RunSummary};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Handles the comment command: compose the review comment for a report.
///
/// Prints the comment to stdout (or writes it to `output`). A clean report
/// is a success with nothing to post; composition is never attempted then.
///
/// # Errors
/// Returns error if composition or the output write fails.
pub fn handle_comment(
    report: &Path,
    no_faq: bool,
    fix_command: Option<String>,
    output: Option<&Path>,
) -> Result<LintpostExit> {
    let config = Config::load(Path::new("."));
    let files = match ingest::load_report(report) {
        Ok(files) => files,
        Err(e @ (ReportError::ReportNotFound { .. } | ReportError::Parse(_))) => {
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(LintpostExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };

    let summary = summary::summarize(&files);
    if summary.is_clean() {
        println!(
            "{} No errors or warnings reported. Nothing to post.",
            "OK".green().bold()
        );
        return Ok(LintpostExit::Success);
    }

    let fix = fix_command.unwrap_or(config.report.fix_command);
    let mode = if no_faq || !config.report.faq {
        ReportMode::Minimal
    } else {
        ReportMode::Extended
    };
    let comment = ReportComposer::new(&StylishFormatter, faq::DEFAULT_FAQ, &fix)
        .compose(&files, &summary, mode)?;

    match output {
        Some(path) => {
            fs::write(path, &comment)
                .with_context(|| format!("writing comment to {}", path.display()))?;
            println!(
                "{} Wrote review comment to {}",
                "OK".green().bold(),
                path.display()
            );
        }
        None => println!("{comment}"),
    }

    Ok(problem_exit(&summary))
}

/// Handles the check command: print flags without composing a comment.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_check(report: &Path, json: bool) -> Result<LintpostExit> {
    let files = match ingest::load_report(report) {
        Ok(files) => files,
        Err(e @ (ReportError::ReportNotFound { .. } | ReportError::Parse(_))) => {
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(LintpostExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };

    let summary = summary::summarize(&files);
    if json {
        println!("{}", serde_json::to_string_pretty(&flags_json(&summary))?);
    } else {
        print_flags(&summary);
    }
    Ok(problem_exit(&summary))
}

/// Errors fail the run; warnings alone do not.
fn problem_exit(summary: &RunSummary) -> LintpostExit {
    if summary.error_count > 0 {
        LintpostExit::ProblemsFound
    } else {
        LintpostExit::Success
    }
}

fn print_flags(summary: &RunSummary) {
    println!("errorCount={}", summary.error_count);
    println!("warningCount={}", summary.warning_count);
    println!("fixableErrorCount={}", summary.fixable_error_count);
    println!("fixableWarningCount={}", summary.fixable_warning_count);
    println!("hasErrorsAndWarnings={}", summary.has_errors_and_warnings());
    println!("hasOnlyErrors={}", summary.has_only_errors());
    println!("hasOnlyWarnings={}", summary.has_only_warnings());
    println!("isClean={}", summary.is_clean());
    println!("everyErrorFixable={}", summary.every_error_fixable());
    println!("everyWarningFixable={}", summary.every_warning_fixable());
}

fn flags_json(summary: &RunSummary) -> serde_json::Value {
    serde_json::json!({
        "errorCount": summary.error_count,
        "warningCount": summary.warning_count,
        "fixableErrorCount": summary.fixable_error_count,
        "fixableWarningCount": summary.fixable_warning_count,
        "hasErrorsAndWarnings": summary.has_errors_and_warnings(),
        "hasOnlyErrors": summary.has_only_errors(),
        "hasOnlyWarnings": summary.has_only_warnings(),
        "isClean": summary.is_clean(),
        "everyErrorFixable": summary.every_error_fixable(),
        "everyWarningFixable": summary.every_warning_fixable(),
    })
}
