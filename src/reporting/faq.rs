// src/reporting/faq.rs
//! Static FAQ content appended to extended reports.
//!
//! The copy is constant text, independent of the diagnostics, so it can
//! evolve without touching the aggregation or composition logic.

use super::markdown;

/// One collapsible question/answer block.
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const DEFAULT_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Why am I seeing this comment?",
        answer: "An automated lint step ran against this change and posted a \
                 summary of its report. The comment is regenerated on every \
                 run, so it always reflects the latest push.",
    },
    FaqEntry {
        question: "How do I reproduce these results locally?",
        answer: "Run your project's lint script at the same revision. The \
                 table above mirrors the tool's own console output, so the \
                 local run should list the same files, rules, and counts.",
    },
    FaqEntry {
        question: "What does \"potentially fixable\" mean?",
        answer: "The lint tool marked those diagnostics as resolvable without \
                 human judgment. Running it with its fix option rewrites the \
                 affected files in place; everything else needs a manual edit.",
    },
];

/// Renders the entries as details blocks separated by blank lines.
#[must_use]
pub fn render(entries: &[FaqEntry]) -> String {
    entries
        .iter()
        .map(|e| markdown::details(e.question, e.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}
