// src/exit.rs
//! Standardized process exit codes for `lintpost`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LintpostExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, composition).
    Error = 1,
    /// Input validation failed (missing or malformed report).
    InvalidInput = 2,
    /// The lint report contains errors.
    ProblemsFound = 3,
}

impl LintpostExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for LintpostExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for LintpostExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::Error
            }
        }
    }
}
