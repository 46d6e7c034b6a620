//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Invalid escape sequence
    E0003,
    /// Invalid number literal
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,
    /// `return` outside of a function body
    E1004,
    /// More than 255 parameters or arguments
    E1005,

    // Runtime Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Operand type mismatch
    E2002,
    /// Condition is not a boolean
    E2003,
    /// Callee is not a function
    E2004,
    /// Division by zero
    E2005,
    /// Wrong number of arguments
    E2006,
    /// Call depth limit exceeded
    E2007,
    /// Step budget exhausted
    E2008,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
        }
    }

    /// The user-facing error kind this code is reported under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004 => {
                ErrorKind::Lex
            }
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005 => ErrorKind::Parse,
            ErrorCode::E2001 => ErrorKind::UndefinedName,
            ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004 => ErrorKind::Type,
            ErrorCode::E2005 => ErrorKind::Arithmetic,
            ErrorCode::E2006 => ErrorKind::Arity,
            ErrorCode::E2007 | ErrorCode::E2008 => ErrorKind::ResourceLimit,
        }
    }

    /// Short description, shown by `tiel --explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "invalid escape sequence in string literal",
            ErrorCode::E0004 => "invalid number literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "only a variable can be assigned to",
            ErrorCode::E1004 => "`return` is only allowed inside a function body",
            ErrorCode::E1005 => "a function takes at most 255 parameters",
            ErrorCode::E2001 => "variable is not defined in any enclosing scope",
            ErrorCode::E2002 => "operator applied to operands of the wrong type",
            ErrorCode::E2003 => "`if` and `while` conditions must be booleans",
            ErrorCode::E2004 => "only functions can be called",
            ErrorCode::E2005 => "division by zero",
            ErrorCode::E2006 => "argument count does not match the function's parameters",
            ErrorCode::E2007 => "call depth limit exceeded",
            ErrorCode::E2008 => "step budget exhausted",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.kind() == ErrorKind::Lex
    }

    pub fn is_parser_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    pub fn is_runtime_error(&self) -> bool {
        !self.is_lexer_error() && !self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Category of an error as reported to the user.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    Lex,
    Parse,
    UndefinedName,
    Type,
    Arithmetic,
    Arity,
    ResourceLimit,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Lex => "LexError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::UndefinedName => "UndefinedNameError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Arithmetic => "ArithmeticError",
            ErrorKind::Arity => "ArityError",
            ErrorKind::ResourceLimit => "ResourceLimitError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
