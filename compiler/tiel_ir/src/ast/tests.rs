use super::*;

fn e(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::DUMMY)
}

fn s(kind: StmtKind) -> Stmt {
    Stmt::new(kind, Span::DUMMY)
}

const DEPTH: usize = 200_000;

#[test]
fn test_drop_deep_unary_chain() {
    let mut expr = e(ExprKind::Literal(Lit::Number(1.0)));
    for _ in 0..DEPTH {
        expr = e(ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(expr),
        });
    }
    drop(expr);
}

#[test]
fn test_drop_deep_left_leaning_binary_chain() {
    let mut expr = e(ExprKind::Literal(Lit::Number(1.0)));
    for _ in 0..DEPTH {
        expr = e(ExprKind::Binary {
            op: BinaryOp::Add,
            op_span: Span::DUMMY,
            left: Box::new(expr),
            right: Box::new(e(ExprKind::Literal(Lit::Number(1.0)))),
        });
    }
    drop(expr);
}

#[test]
fn test_drop_deep_statement_nesting() {
    let mut stmt = s(StmtKind::Block(Vec::new()));
    for i in 0..DEPTH {
        stmt = match i % 3 {
            0 => s(StmtKind::Block(vec![stmt])),
            1 => s(StmtKind::While {
                cond: e(ExprKind::Literal(Lit::Bool(false))),
                body: Box::new(stmt),
            }),
            _ => s(StmtKind::If {
                cond: e(ExprKind::Literal(Lit::Bool(true))),
                then_branch: Box::new(stmt),
                else_branch: Some(Box::new(s(StmtKind::Return(None)))),
            }),
        };
    }
    let program = Program {
        statements: vec![stmt],
    };
    drop(program);
}

#[test]
fn test_drop_nested_function_bodies() {
    let mut body = vec![s(StmtKind::Return(None))];
    for _ in 0..DEPTH / 4 {
        let decl = FunctionDecl {
            name: Name::EMPTY,
            params: Vec::new(),
            body,
            span: Span::DUMMY,
        };
        body = vec![s(StmtKind::Function(Rc::new(decl)))];
    }
    drop(body);
}

#[test]
fn test_shared_function_body_outlives_statement() {
    let decl = Rc::new(FunctionDecl {
        name: Name::EMPTY,
        params: Vec::new(),
        body: vec![s(StmtKind::Expression(e(ExprKind::Literal(Lit::Number(7.0)))))],
        span: Span::DUMMY,
    });
    let stmt = s(StmtKind::Function(Rc::clone(&decl)));
    drop(stmt);

    assert_eq!(Rc::strong_count(&decl), 1);
    assert_eq!(decl.body.len(), 1);
    assert!(matches!(
        decl.body[0].kind,
        StmtKind::Expression(Expr {
            kind: ExprKind::Literal(Lit::Number(_)),
            ..
        })
    ));
}
