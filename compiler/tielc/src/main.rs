//! TiEL command-line interpreter.

use std::process::ExitCode;

use tielc::cli::{parse_args, Command, USAGE};
use tielc::commands::{explain_error, run};
use tielc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("Usage error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?command, "parsed command line");

    match command {
        Command::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("tiel {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Explain(code) => explain_error(&code),
        Command::Run(options) => match run(&options) {
            Ok(code) => code,
            Err(err) => {
                if err.is_usage() {
                    eprintln!("Usage error: {err}");
                    eprintln!();
                    eprint!("{USAGE}");
                } else {
                    eprintln!("Error: {err}");
                }
                ExitCode::FAILURE
            }
        },
    }
}
