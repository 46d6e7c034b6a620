//! Runtime errors.
//!
//! Errors are built through the `#[cold]` factory functions below so that
//! message wording lives in one place. The interpreter attaches the span
//! and a call-stack backtrace at the error site.

use std::fmt;

use tiel_diagnostic::{Diagnostic, ErrorCode, ErrorKind};
use tiel_ir::Span;

use crate::Value;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedName { name: String },
    #[error("Operands to '{op}' must be numbers.")]
    OperandsMustBeNumbers {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("Operand to '{op}' must be a number.")]
    OperandMustBeNumber {
        op: &'static str,
        found: &'static str,
    },
    #[error("Condition must be a boolean.")]
    ConditionNotBoolean { found: &'static str },
    #[error("Can only call functions.")]
    NotCallable { found: &'static str },
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Expected {expected} arguments but got {found}.")]
    ArityMismatch { expected: usize, found: usize },
    #[error("Maximum call depth of {limit} exceeded.")]
    CallDepthExceeded { limit: usize },
    #[error("Step budget of {limit} exhausted.")]
    StepBudgetExhausted { limit: u64 },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedName { .. } => ErrorCode::E2001,
            EvalErrorKind::OperandsMustBeNumbers { .. }
            | EvalErrorKind::OperandMustBeNumber { .. } => ErrorCode::E2002,
            EvalErrorKind::ConditionNotBoolean { .. } => ErrorCode::E2003,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E2004,
            EvalErrorKind::DivisionByZero => ErrorCode::E2005,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2006,
            EvalErrorKind::CallDepthExceeded { .. } => ErrorCode::E2007,
            EvalErrorKind::StepBudgetExhausted { .. } => ErrorCode::E2008,
        }
    }

    /// The user-facing error category (`TypeError`, `ArityError`, ...).
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.code().kind()
    }

    fn label(&self) -> String {
        match self {
            EvalErrorKind::UndefinedName { .. } => "not found in this scope".to_string(),
            EvalErrorKind::OperandsMustBeNumbers { left, right, .. } => {
                format!("found {left} and {right}")
            }
            EvalErrorKind::OperandMustBeNumber { found, .. }
            | EvalErrorKind::ConditionNotBoolean { found }
            | EvalErrorKind::NotCallable { found } => format!("this is a {found}"),
            EvalErrorKind::DivisionByZero => "divisor is zero".to_string(),
            EvalErrorKind::ArityMismatch { expected, .. } => {
                format!("expected {expected} argument{}", plural(*expected))
            }
            EvalErrorKind::CallDepthExceeded { .. } => "call nested too deeply".to_string(),
            EvalErrorKind::StepBudgetExhausted { .. } => "budget ran out here".to_string(),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// One function activation in a backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Where the call was made.
    pub call_span: Span,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {} at {:?}", frame.name, frame.call_span)?;
        }
        Ok(())
    }
}

/// A runtime error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
    pub backtrace: EvalBacktrace,
    pub notes: Vec<String>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: Span::DUMMY,
            backtrace: EvalBacktrace::default(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind.error_kind()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.label());

        if let Some(frame) = self.backtrace.frames().first() {
            diag = diag.with_secondary_label(
                frame.call_span,
                format!("in this call to `{}`", frame.name),
            );
            if self.backtrace.len() > 1 {
                diag = diag.with_note(format!("{} calls deep", self.backtrace.len()));
            }
        }
        for note in &self.notes {
            diag = diag.with_note(note.clone());
        }
        diag
    }
}

// Factories

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedName {
        name: name.to_string(),
    })
}

#[cold]
pub fn operands_must_be_numbers(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::OperandsMustBeNumbers {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn operand_must_be_number(op: &'static str, operand: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::OperandMustBeNumber {
        op,
        found: operand.type_name(),
    })
}

#[cold]
pub fn condition_not_boolean(found: &Value) -> EvalError {
    let err = EvalError::new(EvalErrorKind::ConditionNotBoolean {
        found: found.type_name(),
    });
    if found.is_nil() {
        err.with_note("compare explicitly, for example `x != nil`")
    } else {
        err
    }
}

#[cold]
pub fn not_callable(found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        found: found.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn wrong_arg_count(expected: usize, found: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, found })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit })
        .with_note("raise the limit with `--max-depth` or `TIEL_MAX_DEPTH`")
}

#[cold]
pub fn step_budget_exhausted(limit: u64) -> EvalError {
    EvalError::new(EvalErrorKind::StepBudgetExhausted { limit })
        .with_note("loop iterations and calls each take one step; see `--max-steps`")
}

#[cfg(test)]
mod tests;
