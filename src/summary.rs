// src/summary.rs
//! Aggregation of per-file lint results into run-level counts and
//! classification.
//!
//! Files with no errors and no warnings are dropped before summation, so
//! they can never affect the totals. Summation is commutative; input order
//! does not change the result.

use crate::types::FileDiagnostics;
use serde::Serialize;

/// The mutually exclusive run state derived from aggregate counts.
///
/// Exactly one variant holds for any input collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    ErrorsAndWarnings,
    ErrorsOnly,
    WarningsOnly,
    Clean,
}

/// Run-level totals over the problematic files of a lint report.
///
/// Produced fresh per call by [`summarize`]; nothing is cached between
/// report requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_error_count: usize,
    pub fixable_warning_count: usize,
}

/// Reduces a collection of per-file results into a [`RunSummary`].
///
/// Total function: an empty collection, or one with only clean files,
/// yields a clean summary and is a valid result at this layer.
#[must_use]
pub fn summarize(files: &[FileDiagnostics]) -> RunSummary {
    files
        .iter()
        .filter(|f| f.is_problematic())
        .fold(RunSummary::default(), |acc, f| RunSummary {
            error_count: acc.error_count + f.error_count,
            warning_count: acc.warning_count + f.warning_count,
            fixable_error_count: acc.fixable_error_count + f.fixable_error_count,
            fixable_warning_count: acc.fixable_warning_count + f.fixable_warning_count,
        })
}

impl RunSummary {
    /// Derives the classification from the aggregate counts.
    #[must_use]
    pub fn classification(&self) -> Classification {
        match (self.error_count > 0, self.warning_count > 0) {
            (true, true) => Classification::ErrorsAndWarnings,
            (true, false) => Classification::ErrorsOnly,
            (false, true) => Classification::WarningsOnly,
            (false, false) => Classification::Clean,
        }
    }

    #[must_use]
    pub fn has_errors_and_warnings(&self) -> bool {
        self.classification() == Classification::ErrorsAndWarnings
    }

    #[must_use]
    pub fn has_only_errors(&self) -> bool {
        self.classification() == Classification::ErrorsOnly
    }

    #[must_use]
    pub fn has_only_warnings(&self) -> bool {
        self.classification() == Classification::WarningsOnly
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.classification() == Classification::Clean
    }

    /// True when every error is auto-fixable. Vacuously true at zero errors.
    #[must_use]
    pub fn every_error_fixable(&self) -> bool {
        self.error_count == self.fixable_error_count
    }

    /// True when every warning is auto-fixable. Vacuously true at zero warnings.
    #[must_use]
    pub fn every_warning_fixable(&self) -> bool {
        self.warning_count == self.fixable_warning_count
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.error_count + self.warning_count
    }
}
