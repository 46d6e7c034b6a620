//! Diagnostic system for TiEL.
//!
//! - Error codes for searchability (`E0xxx` lexer, `E1xxx` parser, `E2xxx`
//!   runtime)
//! - One user-facing [`ErrorKind`] per code
//! - Line/column lookup and terminal rendering

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::{ErrorCode, ErrorKind};
