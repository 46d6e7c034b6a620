//! Interactive read-eval-print loop.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use tiel_diagnostic::TerminalEmitter;
use tracing::debug;

use crate::cli::RunOptions;
use crate::Session;

pub const PROMPT: &str = "> ";

/// Start the REPL on the process's stdin and stdout.
pub fn run_repl(options: &RunOptions) -> ExitCode {
    let mut session = Session::new(options.config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut errors = TerminalEmitter::stderr(options.color, io::stderr().is_terminal());
    let interactive = stdin.is_terminal();

    match repl_loop(&mut session, stdin.lock(), &mut stdout, &mut errors, interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read lines from `input` until EOF or `exit`, evaluating each in
/// `session`. Non-`nil` results go to `out`; errors go to `errors` and the
/// loop carries on.
pub fn repl_loop<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    errors: &mut TerminalEmitter<E>,
    show_prompt: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();
    loop {
        if show_prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if show_prompt {
                writeln!(out)?;
            }
            return Ok(());
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "exit" {
            return Ok(());
        }

        match session.run_line(text) {
            Ok(value) if value.is_nil() => {}
            Ok(value) => writeln!(out, "{value}")?,
            Err(err) => {
                debug!(kind = %err.kind(), "repl input failed");
                errors.emit(&err.to_diagnostic(), text);
                errors.flush();
            }
        }
    }
}
