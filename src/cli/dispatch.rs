//! Command dispatch logic extracted from binary to reduce main function size.

use super::{args::Commands, handlers};
use crate::exit::LintpostExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LintpostExit> {
    match command {
        Commands::Comment {
            report,
            no_faq,
            fix_command,
            output,
        } => handlers::handle_comment(&report, no_faq, fix_command, output.as_deref()),
        Commands::Check { report, json } => handlers::handle_check(&report, json),
    }
}
