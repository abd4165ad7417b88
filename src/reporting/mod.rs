// src/reporting/mod.rs
//! Composition of the review comment from a summarized lint run.
//!
//! A report is three sections joined by blank lines: a classification
//! headline, the diagnostic table in a fenced code block, and a remediation
//! footer. The extended mode appends a separator and the FAQ blocks.

pub mod faq;
pub mod markdown;
pub mod table;

use self::faq::FaqEntry;
use self::table::{StylishFormatter, TableFormatter};
use crate::error::ReportError;
use crate::summary::{Classification, RunSummary};
use crate::types::FileDiagnostics;

pub const ERROR_ICON: &str =
    "https://github.githubassets.com/images/icons/emoji/unicode/274c.png";
pub const WARNING_ICON: &str =
    "https://github.githubassets.com/images/icons/emoji/unicode/26a0.png";
pub const DEFAULT_FIX_COMMAND: &str = "npx eslint --fix .";

/// Which sections a composed report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Title, diagnostics, and footer.
    Minimal,
    /// Minimal plus a separator and the FAQ blocks.
    Extended,
}

/// Report composer with injectable table formatter and FAQ content.
pub struct ReportComposer<'a> {
    formatter: &'a dyn TableFormatter,
    faq: &'a [FaqEntry],
    fix_command: &'a str,
}

impl<'a> ReportComposer<'a> {
    #[must_use]
    pub fn new(
        formatter: &'a dyn TableFormatter,
        faq: &'a [FaqEntry],
        fix_command: &'a str,
    ) -> Self {
        Self {
            formatter,
            faq,
            fix_command,
        }
    }

    /// Composes the full report text.
    ///
    /// # Errors
    /// Returns `NothingToReport` when the summary is clean; composition is
    /// only meant to run when there is something to show. `FooterUndecided`
    /// signals inconsistent summary counts and indicates a logic defect.
    pub fn compose(
        &self,
        files: &[FileDiagnostics],
        summary: &RunSummary,
        mode: ReportMode,
    ) -> Result<String, ReportError> {
        let class = summary.classification();
        if class == Classification::Clean {
            return Err(ReportError::NothingToReport);
        }

        let sections = [
            title(class),
            self.diagnostics(files),
            self.footer(class, summary)?,
        ];
        let mut out = sections.join("\n\n");

        if mode == ReportMode::Extended {
            out.push_str("\n\n---\n\n");
            out.push_str(&faq::render(self.faq));
        }
        Ok(out)
    }

    fn diagnostics(&self, files: &[FileDiagnostics]) -> String {
        let problematic: Vec<FileDiagnostics> = files
            .iter()
            .filter(|f| f.is_problematic())
            .cloned()
            .collect();
        markdown::code_block(&self.formatter.format(&problematic), "sh")
    }

    fn footer(
        &self,
        class: Classification,
        summary: &RunSummary,
    ) -> Result<String, ReportError> {
        let (subject, fixable) = match class {
            Classification::ErrorsAndWarnings => (
                "errors and warnings",
                summary.every_error_fixable() && summary.every_warning_fixable(),
            ),
            Classification::ErrorsOnly => ("errors", summary.every_error_fixable()),
            Classification::WarningsOnly => ("warnings", summary.every_warning_fixable()),
            Classification::Clean => return Err(ReportError::FooterUndecided),
        };
        Ok(if fixable {
            autofix_steps(subject, self.fix_command)
        } else {
            manual_instruction(subject)
        })
    }
}

impl Default for ReportComposer<'static> {
    fn default() -> Self {
        Self::new(&StylishFormatter, faq::DEFAULT_FAQ, DEFAULT_FIX_COMMAND)
    }
}

/// Composes a report with the production formatter, FAQ, and fix command.
///
/// # Errors
/// See [`ReportComposer::compose`].
pub fn compose_report(
    files: &[FileDiagnostics],
    summary: &RunSummary,
    mode: ReportMode,
) -> Result<String, ReportError> {
    ReportComposer::default().compose(files, summary, mode)
}

/// Classification headline, picked by priority: both classes present, then
/// errors only, then warnings only.
fn title(class: Classification) -> String {
    match class {
        Classification::ErrorsAndWarnings => format!(
            "### {} Lint found errors and warnings",
            markdown::image(ERROR_ICON, "errors")
        ),
        Classification::ErrorsOnly => format!(
            "### {} Lint found errors",
            markdown::image(ERROR_ICON, "errors")
        ),
        // Fallback arm; a clean run is rejected before any section is built.
        Classification::WarningsOnly | Classification::Clean => format!(
            "### {} Lint found warnings",
            markdown::image(WARNING_ICON, "warnings")
        ),
    }
}

fn autofix_steps(subject: &str, fix_command: &str) -> String {
    format!(
        "All of the reported {subject} are auto-fixable. To clean this up:\n\n\
         1. Run `{fix_command}` in your checkout.\n\
         2. Review the changes it makes.\n\
         3. Commit and push the result."
    )
}

fn manual_instruction(subject: &str) -> String {
    format!(
        "Some of the reported {subject} cannot be fixed automatically. \
         Please fix the {subject} in your checkout and update this branch."
    )
}
