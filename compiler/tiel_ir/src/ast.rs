//! Abstract syntax tree.
//!
//! Children are owned by their parent. Function declarations sit behind an
//! `Rc` so that runtime function values can point at the body without
//! cloning it. Nothing mutates the tree after parsing.
//!
//! `Expr` and `Stmt` tear down their subtrees with an explicit work-list, so
//! dropping a tree never recurses on the native stack however deep it is.

use super::{Name, Span};
use std::fmt;
use std::rc::Rc;

/// A parsed source unit.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_expr(&mut self.kind, &mut pending);
        drain(pending);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Lit),
    Variable(Name),
    /// `name = value`; right-associative.
    Assign {
        name: Name,
        value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        op_span: Span,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `and` / `or`, which skip the right operand when the left decides.
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

/// Literal constants.
#[derive(Clone, Debug, PartialEq)]
pub enum Lit {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_stmt(&mut self.kind, &mut pending);
        drain(pending);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expression(Expr),
    Var {
        name: Name,
        init: Expr,
    },
    Function(Rc<FunctionDecl>),
    Block(Vec<Stmt>),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
}

/// `fun name(params) { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A subtree waiting to be dropped.
enum Detached {
    Expr(Expr),
    Stmt(Stmt),
}

/// Drop every queued node. Each node's children are moved onto the queue
/// first, so the node itself drops as a leaf.
fn drain(mut pending: Vec<Detached>) {
    while let Some(node) = pending.pop() {
        match node {
            Detached::Expr(mut expr) => detach_expr(&mut expr.kind, &mut pending),
            Detached::Stmt(mut stmt) => detach_stmt(&mut stmt.kind, &mut pending),
        }
    }
}

fn detach_expr(kind: &mut ExprKind, pending: &mut Vec<Detached>) {
    match std::mem::replace(kind, ExprKind::Literal(Lit::Nil)) {
        ExprKind::Literal(_) | ExprKind::Variable(_) => {}
        ExprKind::Assign { value, .. } | ExprKind::Unary { operand: value, .. } => {
            pending.push(Detached::Expr(*value));
        }
        ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
            pending.push(Detached::Expr(*left));
            pending.push(Detached::Expr(*right));
        }
        ExprKind::Call { callee, args } => {
            pending.push(Detached::Expr(*callee));
            pending.extend(args.into_iter().map(Detached::Expr));
        }
    }
}

fn detach_stmt(kind: &mut StmtKind, pending: &mut Vec<Detached>) {
    match std::mem::replace(kind, StmtKind::Block(Vec::new())) {
        StmtKind::Expression(expr) | StmtKind::Var { init: expr, .. } => {
            pending.push(Detached::Expr(expr));
        }
        StmtKind::Return(value) => pending.extend(value.map(Detached::Expr)),
        // Still shared with a runtime function value: the last owner
        // tears it down.
        StmtKind::Function(decl) => {
            if let Ok(decl) = Rc::try_unwrap(decl) {
                pending.extend(decl.body.into_iter().map(Detached::Stmt));
            }
        }
        StmtKind::Block(stmts) => pending.extend(stmts.into_iter().map(Detached::Stmt)),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            pending.push(Detached::Expr(cond));
            pending.push(Detached::Stmt(*then_branch));
            pending.extend(else_branch.map(|b| Detached::Stmt(*b)));
        }
        StmtKind::While { cond, body } => {
            pending.push(Detached::Expr(cond));
            pending.push(Detached::Stmt(*body));
        }
    }
}

#[cfg(test)]
mod tests;
