//! TiEL evaluator.
//!
//! Walks the AST produced by `tiel_parse`:
//! - [`Environment`]: lexically nested scopes shared by closures
//! - [`Value`]: runtime values, including closures and builtins
//! - [`Interpreter`]: `evaluate` / `execute` / `interpret`
//! - [`EvalError`]: runtime errors, convertible to a `Diagnostic`

mod builtins;
pub mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use builtins::{Builtin, BuiltinFn, BUILTINS};
pub use environment::{Environment, LocalScope, Scope, UndefinedName};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterConfig, Interrupt, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use value::{FunctionValue, Value};
