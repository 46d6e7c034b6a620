//! TiEL driver.
//!
//! ```text
//! source ──► tiel_lexer::tokenize ──► tiel_parse ──► Program
//!                                                      │
//!                     Session (interner + root env) ◄──┘
//!                                │
//!                                ▼
//!                 tiel_eval::Interpreter ──► Value | TielError
//! ```
//!
//! A failing stage ends the run; the driver turns the error into a
//! diagnostic. [`run`] is the one-shot entry point; [`Session`] keeps state
//! alive across inputs for the REPL.

pub mod cli;
pub mod commands;
mod error;
mod session;
pub mod tracing_setup;

pub use error::{CliError, TielError};
pub use session::Session;

pub use tiel_eval::{InterpreterConfig, Value};

/// Lex, parse and evaluate `source` against a fresh root environment,
/// printing to stdout.
pub fn run(source: &str) -> Result<Value, TielError> {
    Session::new(InterpreterConfig::default()).run(source)
}
