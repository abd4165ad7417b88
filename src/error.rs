// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("nothing to report: the lint run produced no errors or warnings")]
    NothingToReport,

    #[error("footer selection reached a clean classification; summary counts are inconsistent")]
    FooterUndecided,

    #[error("lint report not found: {path}")]
    ReportNotFound { path: PathBuf },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed lint report: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
