use clap::Parser;
use colored::Colorize;
use lintpost_core::cli::{self, Cli};
use lintpost_core::exit::LintpostExit;

fn main() -> LintpostExit {
    env_logger::init();
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(LintpostExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            LintpostExit::Error
        }
    }
}
