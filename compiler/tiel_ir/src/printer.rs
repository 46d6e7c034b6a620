//! S-expression rendering of the AST, used by `tiel --ast` and parser tests.
//!
//! ```text
//! var x = 1 + 2;   =>  (var x (binary + (literal 1) (literal 2)))
//! ```

use super::ast::{Expr, ExprKind, FunctionDecl, Lit, Program, Stmt, StmtKind};
use super::StringInterner;
use tiel_stack::ensure_sufficient_stack;

pub struct AstPrinter<'a> {
    interner: &'a StringInterner,
    out: String,
}

impl<'a> AstPrinter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstPrinter {
            interner,
            out: String::new(),
        }
    }

    /// One line per top-level statement.
    pub fn print_program(mut self, program: &Program) -> String {
        for stmt in &program.statements {
            self.stmt(stmt);
            self.out.push('\n');
        }
        self.out
    }

    pub fn print_stmt(mut self, stmt: &Stmt) -> String {
        self.stmt(stmt);
        self.out
    }

    pub fn print_expr(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.out
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn atom(&mut self, text: &str) {
        self.out.push(' ');
        self.out.push_str(text);
    }

    fn name(&mut self, name: crate::Name) {
        let text = self.interner.lookup(name);
        self.atom(text);
    }

    fn child_expr(&mut self, expr: &Expr) {
        self.out.push(' ');
        self.expr(expr);
    }

    fn child_stmt(&mut self, stmt: &Stmt) {
        self.out.push(' ');
        self.stmt(stmt);
    }

    fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(lit) => {
                self.open("literal");
                match lit {
                    Lit::Nil => self.atom("nil"),
                    Lit::Bool(b) => self.atom(if *b { "true" } else { "false" }),
                    Lit::Number(n) => self.atom(&n.to_string()),
                    Lit::Str(s) => self.atom(&format!("{s:?}")),
                }
            }
            ExprKind::Variable(name) => {
                self.open("variable");
                self.name(*name);
            }
            ExprKind::Assign { name, value } => {
                self.open("assign");
                self.name(*name);
                self.child_expr(value);
            }
            ExprKind::Binary {
                op, left, right, ..
            } => {
                self.open("binary");
                self.atom(op.as_symbol());
                self.child_expr(left);
                self.child_expr(right);
            }
            ExprKind::Logical { op, left, right } => {
                self.open("logical");
                self.atom(op.as_symbol());
                self.child_expr(left);
                self.child_expr(right);
            }
            ExprKind::Unary { op, operand } => {
                self.open("unary");
                self.atom(op.as_symbol());
                self.child_expr(operand);
            }
            ExprKind::Call { callee, args } => {
                self.open("call");
                self.child_expr(callee);
                for arg in args {
                    self.child_expr(arg);
                }
            }
        }
        self.close();
    }

    fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.open("expr");
                self.child_expr(expr);
            }
            StmtKind::Var { name, init } => {
                self.open("var");
                self.name(*name);
                self.child_expr(init);
            }
            StmtKind::Function(decl) => self.function(decl),
            StmtKind::Block(stmts) => {
                self.open("block");
                for s in stmts {
                    self.child_stmt(s);
                }
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.open("if");
                self.child_expr(cond);
                self.child_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.child_stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.open("while");
                self.child_expr(cond);
                self.child_stmt(body);
            }
            StmtKind::Return(value) => {
                self.open("return");
                if let Some(value) = value {
                    self.child_expr(value);
                }
            }
        }
        self.close();
    }

    fn function(&mut self, decl: &FunctionDecl) {
        self.open("fun");
        self.name(decl.name);
        self.out.push(' ');
        self.open("params");
        for param in &decl.params {
            self.name(*param);
        }
        self.close();
        self.out.push(' ');
        self.open("body");
        for s in &decl.body {
            self.child_stmt(s);
        }
        self.close();
    }
}

#[cfg(test)]
mod tests;
