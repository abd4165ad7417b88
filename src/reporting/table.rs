// src/reporting/table.rs
//! Plain-text diagnostic table in the upstream tool's console style.
//!
//! One header line per problematic file, aligned rows per message, then a
//! summary line and, when applicable, a fixability line.

use crate::types::{FileDiagnostics, LintMessage};

/// Strategy for rendering the diagnostics block of a report.
pub trait TableFormatter {
    /// Renders the collection to a multi-line string. Must return the empty
    /// string when there are zero total problems.
    fn format(&self, files: &[FileDiagnostics]) -> String;
}

/// Production formatter mirroring the lint tool's own console output.
pub struct StylishFormatter;

impl TableFormatter for StylishFormatter {
    fn format(&self, files: &[FileDiagnostics]) -> String {
        let problematic: Vec<&FileDiagnostics> =
            files.iter().filter(|f| f.is_problematic()).collect();

        let errors: usize = problematic.iter().map(|f| f.error_count).sum();
        let warnings: usize = problematic.iter().map(|f| f.warning_count).sum();
        let fixable_errors: usize = problematic.iter().map(|f| f.fixable_error_count).sum();
        let fixable_warnings: usize =
            problematic.iter().map(|f| f.fixable_warning_count).sum();
        let total = errors + warnings;
        if total == 0 {
            return String::new();
        }

        let mut out = String::new();
        for file in &problematic {
            out.push_str(&file.file_path);
            out.push('\n');
            write_rows(&mut out, &file.messages);
            out.push('\n');
        }

        out.push_str(&format!(
            "\u{2716} {} {} ({} {}, {} {})",
            total,
            pluralize("problem", total),
            errors,
            pluralize("error", errors),
            warnings,
            pluralize("warning", warnings),
        ));
        if fixable_errors > 0 || fixable_warnings > 0 {
            out.push('\n');
            out.push_str(&format!(
                "{} {} and {} {} potentially fixable with the `--fix` option.",
                fixable_errors,
                pluralize("error", fixable_errors),
                fixable_warnings,
                pluralize("warning", fixable_warnings),
            ));
        }
        out
    }
}

/// Writes one aligned row per message: indent, line:column, severity label,
/// message with a trailing period stripped, rule id or nothing.
fn write_rows(out: &mut String, messages: &[LintMessage]) {
    let loc_width = column_width(messages, |m| location(m).chars().count());
    let sev_width = column_width(messages, |m| m.severity.label().len());
    let msg_width = column_width(messages, |m| strip_period(&m.message).chars().count());

    for m in messages {
        let row = format!(
            "  {loc:<loc_width$}  {sev:<sev_width$}  {msg:<msg_width$}  {rule}",
            loc = location(m),
            sev = m.severity.label(),
            msg = strip_period(&m.message),
            rule = m.rule_id.as_deref().unwrap_or(""),
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }
}

fn column_width(messages: &[LintMessage], width: impl Fn(&LintMessage) -> usize) -> usize {
    messages.iter().map(width).max().unwrap_or(0)
}

fn location(m: &LintMessage) -> String {
    format!("{}:{}", m.line, m.column)
}

fn strip_period(message: &str) -> &str {
    message.strip_suffix('.').unwrap_or(message)
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
