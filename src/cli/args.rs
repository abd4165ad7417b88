use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lintpost", version, about = "Lint report summarizer for review comments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose the Markdown review comment for a lint report
    Comment {
        /// Path to the lint report JSON
        #[arg(value_name = "REPORT")]
        report: PathBuf,
        /// Skip the FAQ section even when the config enables it
        #[arg(long)]
        no_faq: bool,
        /// Override the fix command shown in the footer
        #[arg(long, value_name = "CMD")]
        fix_command: Option<String>,
        /// Write the comment to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print classification flags without composing a comment
    Check {
        /// Path to the lint report JSON
        #[arg(value_name = "REPORT")]
        report: PathBuf,
        /// Emit the flags as JSON
        #[arg(long)]
        json: bool,
    },
}
