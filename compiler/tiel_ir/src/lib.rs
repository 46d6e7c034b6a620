//! TiEL IR - shared front-end types.
//!
//! - Spans and positions for source locations
//! - Names for interned identifiers
//! - Tokens produced by the lexer
//! - AST nodes (Expr, Stmt, `FunctionDecl`) and an s-expression printer

pub mod ast;
mod interner;
mod printer;
mod span;
mod token;

pub use ast::{
    BinaryOp, Expr, ExprKind, FunctionDecl, Lit, LogicalOp, Program, Stmt, StmtKind, UnaryOp,
};
pub use interner::{InternError, Name, SharedInterner, StringInterner};
pub use printer::AstPrinter;
pub use span::{Position, Span};
pub use token::{Literal, Token, TokenCategory, TokenKind};
