//! Command-line parsing for `tiel`.

use std::path::PathBuf;

use tiel_diagnostic::ColorMode;
use tiel_eval::InterpreterConfig;

use crate::CliError;

/// Environment variable holding the default call depth limit.
pub const MAX_DEPTH_ENV: &str = "TIEL_MAX_DEPTH";

pub const USAGE: &str = "\
Usage: tiel [OPTIONS] [INPUT]

Runs a TiEL program. INPUT is a file path, or `-` for standard input.
Without INPUT the REPL starts when stdin is a terminal; otherwise the
program is read from stdin.

Options:
  --tokens            Print the token stream before running
  --ast               Print the syntax tree before running
  --repl              Start the interactive REPL
  --max-depth=<N>     Call depth limit (default 1000, or $TIEL_MAX_DEPTH)
  --max-steps=<N>     Step budget: loop iterations plus calls (default unlimited)
  --color=<mode>      Diagnostics color: auto, always, never
  --explain=<CODE>    Explain an error code (e.g. E2002)
  -h, --help          Show this help message
  -V, --version       Show version information

Environment:
  TIEL_LOG            Log filter (e.g. `debug`, `tiel_eval=trace`)
  TIEL_LOG_TREE       Set to render logs as an indented tree
  TIEL_MAX_DEPTH      Default call depth limit
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Stdin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// `None`: decide between REPL and stdin from the terminal.
    pub input: Option<Input>,
    pub show_tokens: bool,
    pub show_ast: bool,
    pub repl: bool,
    pub config: InterpreterConfig,
    pub color: ColorMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            input: None,
            show_tokens: false,
            show_ast: false,
            repl: false,
            config: InterpreterConfig::default(),
            color: ColorMode::Auto,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Explain(String),
    Help,
    Version,
}

/// Parse arguments (without the program name). `env` looks up
/// environment variables.
pub fn parse_args<I, S, F>(args: I, env: F) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(&str) -> Option<String>,
{
    let mut options = RunOptions::default();
    if let Some(depth) = env(MAX_DEPTH_ENV) {
        options.config.max_call_depth = parse_limit(MAX_DEPTH_ENV, &depth)?;
    }

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &'static str| -> Result<String, CliError> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or(CliError::MissingValue(name)),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--explain" => return Ok(Command::Explain(value("--explain")?)),
            "--tokens" => options.show_tokens = true,
            "--ast" => options.show_ast = true,
            "--repl" => options.repl = true,
            "--max-depth" => {
                options.config.max_call_depth = parse_limit("--max-depth", &value("--max-depth")?)?;
            }
            "--max-steps" => {
                let raw = value("--max-steps")?;
                let steps = parse_limit("--max-steps", &raw)?;
                options.config.max_steps = Some(u64::try_from(steps).unwrap_or(u64::MAX));
            }
            "--color" => {
                let raw = value("--color")?;
                options.color = ColorMode::parse(&raw).ok_or(CliError::InvalidValue {
                    option: "--color",
                    value: raw,
                })?;
            }
            "-" => set_input(&mut options, Input::Stdin, arg)?,
            _ if flag.starts_with('-') => return Err(CliError::UnknownOption(arg)),
            _ => set_input(&mut options, Input::Path(PathBuf::from(&arg)), arg)?,
        }
    }

    if options.repl && options.input.is_some() {
        return Err(CliError::ReplWithInput);
    }
    Ok(Command::Run(options))
}

fn set_input(options: &mut RunOptions, input: Input, raw: String) -> Result<(), CliError> {
    if options.input.is_some() {
        return Err(CliError::ExtraInput(raw));
    }
    options.input = Some(input);
    Ok(())
}

/// A positive count.
fn parse_limit(option: &'static str, raw: &str) -> Result<usize, CliError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidValue {
            option,
            value: raw.to_string(),
        }),
    }
}
