use super::*;
use crate::ast::{BinaryOp, LogicalOp, UnaryOp};
use crate::Span;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn e(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::DUMMY)
}

fn s(kind: StmtKind) -> Stmt {
    Stmt::new(kind, Span::DUMMY)
}

fn num(n: f64) -> Expr {
    e(ExprKind::Literal(Lit::Number(n)))
}

#[test]
fn test_print_binary_precedence_shape() {
    let interner = StringInterner::new();
    let expr = e(ExprKind::Binary {
        op: BinaryOp::Add,
        op_span: Span::DUMMY,
        left: Box::new(num(1.0)),
        right: Box::new(e(ExprKind::Binary {
            op: BinaryOp::Mul,
            op_span: Span::DUMMY,
            left: Box::new(num(2.0)),
            right: Box::new(num(3.5)),
        })),
    });
    assert_eq!(
        AstPrinter::new(&interner).print_expr(&expr),
        "(binary + (literal 1) (binary * (literal 2) (literal 3.5)))"
    );
}

#[test]
fn test_print_literals_and_unary() {
    let interner = StringInterner::new();
    let expr = e(ExprKind::Logical {
        op: LogicalOp::Or,
        left: Box::new(e(ExprKind::Unary {
            op: UnaryOp::Not,
            operand: Box::new(e(ExprKind::Literal(Lit::Nil))),
        })),
        right: Box::new(e(ExprKind::Literal(Lit::Str(Rc::from("a\"b"))))),
    });
    assert_eq!(
        AstPrinter::new(&interner).print_expr(&expr),
        r#"(logical or (unary not (literal nil)) (literal "a\"b"))"#
    );
}

#[test]
fn test_print_function_program() {
    let interner = StringInterner::new();
    let add = interner.intern("add");
    let a = interner.intern("a");
    let b = interner.intern("b");

    let decl = FunctionDecl {
        name: add,
        params: vec![a, b],
        body: vec![s(StmtKind::Return(Some(e(ExprKind::Binary {
            op: BinaryOp::Add,
            op_span: Span::DUMMY,
            left: Box::new(e(ExprKind::Variable(a))),
            right: Box::new(e(ExprKind::Variable(b))),
        }))))],
        span: Span::DUMMY,
    };
    let program = Program {
        statements: vec![
            s(StmtKind::Function(Rc::new(decl))),
            s(StmtKind::Expression(e(ExprKind::Call {
                callee: Box::new(e(ExprKind::Variable(add))),
                args: vec![num(1.0), num(2.0)],
            }))),
        ],
    };

    assert_eq!(
        AstPrinter::new(&interner).print_program(&program),
        "(fun add (params a b) (body (return (binary + (variable a) (variable b)))))\n\
         (expr (call (variable add) (literal 1) (literal 2)))\n"
    );
}

#[test]
fn test_print_control_flow() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let stmt = s(StmtKind::While {
        cond: e(ExprKind::Binary {
            op: BinaryOp::Lt,
            op_span: Span::DUMMY,
            left: Box::new(e(ExprKind::Variable(x))),
            right: Box::new(num(3.0)),
        }),
        body: Box::new(s(StmtKind::Block(vec![
            s(StmtKind::Var {
                name: x,
                init: e(ExprKind::Literal(Lit::Bool(true))),
            }),
            s(StmtKind::If {
                cond: e(ExprKind::Variable(x)),
                then_branch: Box::new(s(StmtKind::Return(None))),
                else_branch: None,
            }),
        ]))),
    });
    assert_eq!(
        AstPrinter::new(&interner).print_stmt(&stmt),
        "(while (binary < (variable x) (literal 3)) \
         (block (var x (literal true)) (if (variable x) (return))))"
    );
}

#[test]
fn test_print_deep_tree() {
    let interner = StringInterner::new();
    let depth = 100_000;
    let mut expr = num(1.0);
    for _ in 0..depth {
        expr = e(ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(expr),
        });
    }
    let stmt = s(StmtKind::Block(vec![s(StmtKind::Expression(expr))]));

    let printed = AstPrinter::new(&interner).print_stmt(&stmt);
    assert!(printed.starts_with("(block (expr (unary - (unary - "));
    assert_eq!(printed.matches("(unary -").count(), depth);
}
