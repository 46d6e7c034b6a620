//! Driver-level errors.

use std::path::PathBuf;

use tiel_diagnostic::{Diagnostic, ErrorKind};
use tiel_eval::EvalError;
use tiel_lexer::LexError;
use tiel_parse::{ParseError, SyntaxError};

/// The first error of a run, from whichever stage raised it.
#[derive(Debug, thiserror::Error)]
pub enum TielError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl TielError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TielError::Syntax(e) => e.to_diagnostic(),
            TielError::Eval(e) => e.to_diagnostic(),
        }
    }

    /// `LexError`, `ParseError`, `TypeError`, ...
    pub fn kind(&self) -> ErrorKind {
        match self {
            TielError::Syntax(e) => e.code().kind(),
            TielError::Eval(e) => e.error_kind(),
        }
    }
}

impl From<LexError> for TielError {
    fn from(e: LexError) -> Self {
        TielError::Syntax(e.into())
    }
}

impl From<ParseError> for TielError {
    fn from(e: ParseError) -> Self {
        TielError::Syntax(e.into())
    }
}

/// Bad command line or unreadable input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),
    #[error("'{value}' is not a valid value for {option}")]
    InvalidValue { option: &'static str, value: String },
    #[error("unexpected argument '{0}'; only one input may be given")]
    ExtraInput(String),
    #[error("--repl does not take an input file")]
    ReplWithInput,
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

impl CliError {
    /// Whether the usage text should follow the message.
    pub fn is_usage(&self) -> bool {
        !matches!(self, CliError::Read { .. } | CliError::Stdin(_))
    }
}
