//! Running a whole program from a file or stdin.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use tiel_diagnostic::{ColorMode, TerminalEmitter};
use tracing::{debug, info};

use crate::cli::{Input, RunOptions};
use crate::{CliError, Session, TielError};

/// Read the program text named by `input`.
pub fn read_input(input: &Input) -> Result<String, CliError> {
    match input {
        Input::Path(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::Stdin)?;
            Ok(source)
        }
    }
}

/// Write a pipeline error to stderr as a diagnostic.
pub fn report(err: &TielError, source: &str, color: ColorMode) {
    let mut emitter = TerminalEmitter::stderr(color, io::stderr().is_terminal());
    emitter.emit(&err.to_diagnostic(), source);
    emitter.flush();
}

/// Run `source` in a fresh session, honoring `--tokens` and `--ast`.
pub fn run_source(source: &str, options: &RunOptions) -> ExitCode {
    let mut out = io::stdout();
    let mut session = Session::new(options.config);

    let result = run_with_dumps(&mut session, source, options, &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            info!(kind = %err.kind(), "run failed");
            report(&err, source, options.color);
            ExitCode::FAILURE
        }
    }
}

/// The pipeline with optional token and tree dumps written to `out`
/// ahead of execution.
pub fn run_with_dumps<W: Write>(
    session: &mut Session,
    source: &str,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), TielError> {
    if options.show_tokens {
        for token in tiel_lexer::tokenize(source) {
            let _ = writeln!(out, "{}", token?);
        }
    }

    let program = session.parse(source)?;
    debug!(statements = program.statements.len(), "parsed");
    if options.show_ast {
        let _ = write!(out, "{}", session.print_ast(&program));
    }
    // Dumps must appear before any program output.
    let _ = out.flush();

    session.execute(&program)?;
    Ok(())
}
