// src/ingest.rs
//! Loading and parsing of the upstream lint report.
//!
//! The report is the tool's JSON output: an array of per-file entries with
//! camelCase fields. Everything past this boundary works on in-memory data.

use crate::error::{ReportError, Result};
use crate::types::FileDiagnostics;
use std::fs;
use std::path::Path;

/// Reads and parses a lint report from disk.
///
/// # Errors
/// Returns `ReportNotFound` when the path is not a file, `Io` when the read
/// fails, and `Parse` when the content is not a valid report.
pub fn load_report(path: &Path) -> Result<Vec<FileDiagnostics>> {
    if !path.is_file() {
        return Err(ReportError::ReportNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|source| ReportError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let files = parse_report(&raw)?;
    log::debug!(
        "parsed {} file entries from {}",
        files.len(),
        path.display()
    );
    Ok(files)
}

/// Parses report JSON already held in memory.
///
/// # Errors
/// Returns `Parse` when the content is not a valid report.
pub fn parse_report(raw: &str) -> Result<Vec<FileDiagnostics>> {
    Ok(serde_json::from_str(raw)?)
}
