// src/types.rs
use serde::{Deserialize, Serialize};

/// Message severity as encoded by the upstream lint tool (1 = warning, 2 = error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Returns the lowercase label used in rendered diagnostic rows.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity {other}, expected 1 or 2")),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// A single diagnostic reported at a line/column, optionally tied to a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub rule_id: Option<String>,
}

/// Lint results for a single analyzed file, as supplied by the upstream tool.
///
/// Count fields are tool-supplied and default to zero when absent from the
/// report. `fatal_error_count` is distinct from `fixable_error_count`;
/// fixability decisions never read the fatal count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiagnostics {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
    #[serde(default)]
    pub fatal_error_count: usize,
    #[serde(default)]
    pub fixable_error_count: usize,
    #[serde(default)]
    pub fixable_warning_count: usize,
}

impl FileDiagnostics {
    /// Returns true if the file has at least one error or warning.
    #[must_use]
    pub fn is_problematic(&self) -> bool {
        self.error_count > 0 || self.warning_count > 0
    }

    /// Returns true if no errors or warnings were reported for the file.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.is_problematic()
    }
}
