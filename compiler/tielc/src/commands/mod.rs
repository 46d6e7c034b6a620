//! Command implementations behind the `tiel` binary.

mod explain;
mod repl;
mod run;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

pub use explain::{explain_error, explanation};
pub use repl::{repl_loop, run_repl, PROMPT};
pub use run::{read_input, report, run_source, run_with_dumps};

use crate::cli::{Input, RunOptions};
use crate::CliError;

/// Dispatch a parsed `Run` command: REPL, file, or stdin.
pub fn run(options: &RunOptions) -> Result<ExitCode, CliError> {
    let input = match &options.input {
        Some(input) => input.clone(),
        None if options.repl || io::stdin().is_terminal() => return Ok(run_repl(options)),
        None => Input::Stdin,
    };
    let source = read_input(&input)?;
    Ok(run_source(&source, options))
}
