//! Expression parsing.
//!
//! One method per precedence level; each binary level is left-associative
//! and delegates to the next tighter level for its operands.

use std::rc::Rc;

use tiel_diagnostic::ErrorCode;
use tiel_ir::{BinaryOp, Expr, ExprKind, Lit, Literal, LogicalOp, Token, TokenKind, UnaryOp};
use tiel_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser, MAX_PARAMS};

type Operand<P, E> = fn(&mut P) -> Result<Expr, E>;

impl<I, E> Parser<'_, I>
where
    I: Iterator<Item = Result<Token, E>>,
    E: From<ParseError>,
{
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the stack
    /// instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, E> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `name = value`, right-associative.
    fn parse_assignment(&mut self) -> Result<Expr, E> {
        let target = self.parse_or()?;

        if self.cursor.check(TokenKind::Equal) {
            let equals = self.cursor.advance()?;
            let value = self.parse_expr()?;
            return match &target.kind {
                &ExprKind::Variable(name) => {
                    let span = target.span.to(value.span);
                    Ok(Expr::new(
                        ExprKind::Assign {
                            name,
                            value: Box::new(value),
                        },
                        span,
                    ))
                }
                _ => Err(ParseError::at(ErrorCode::E1003, &equals, "Invalid assignment target.").into()),
            };
        }

        Ok(target)
    }

    fn parse_or(&mut self) -> Result<Expr, E> {
        self.parse_logical(Self::parse_and, TokenKind::Or, LogicalOp::Or)
    }

    fn parse_and(&mut self) -> Result<Expr, E> {
        self.parse_logical(Self::parse_equality, TokenKind::And, LogicalOp::And)
    }

    fn parse_logical(
        &mut self,
        operand: Operand<Self, E>,
        token: TokenKind,
        op: LogicalOp,
    ) -> Result<Expr, E> {
        let mut left = operand(self)?;
        while self.cursor.eat(token)? {
            let right = operand(self)?;
            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::Logical {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, E> {
        self.parse_binary(Self::parse_comparison, |kind| match kind {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            _ => None,
        })
    }

    fn parse_comparison(&mut self) -> Result<Expr, E> {
        self.parse_binary(Self::parse_term, |kind| match kind {
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            _ => None,
        })
    }

    fn parse_term(&mut self) -> Result<Expr, E> {
        self.parse_binary(Self::parse_factor, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_factor(&mut self) -> Result<Expr, E> {
        self.parse_binary(Self::parse_unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// One left-associative binary precedence level.
    fn parse_binary(
        &mut self,
        operand: Operand<Self, E>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, E> {
        let mut left = operand(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            let op_span = self.cursor.advance()?.span;
            let right = operand(self)?;
            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    op_span,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, E> {
        let op = match self.cursor.current_kind() {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_call(),
        };
        let start = self.cursor.advance()?.span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.to(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Primary followed by any number of `(args)` suffixes.
    fn parse_call(&mut self) -> Result<Expr, E> {
        let mut expr = self.parse_primary()?;
        while self.cursor.eat(TokenKind::LeftParen)? {
            let mut args = Vec::new();
            if !self.cursor.check(TokenKind::RightParen) {
                loop {
                    if args.len() >= MAX_PARAMS {
                        return Err(self.error_at_current(
                            ErrorCode::E1005,
                            "Can't have more than 255 arguments.",
                        ));
                    }
                    args.push(self.parse_expr()?);
                    if !self.cursor.eat(TokenKind::Comma)? {
                        break;
                    }
                }
            }
            let close = self.expect(TokenKind::RightParen, "Expect ')' after arguments.")?;
            let span = expr.span.to(close.span);
            expr = Expr::new(
                ExprKind::Call {
                    callee: Box::new(expr),
                    args,
                },
                span,
            );
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, E> {
        let kind = self.cursor.current_kind();
        trace!(?kind, "parse_primary");
        let lit = match kind {
            TokenKind::True => Lit::Bool(true),
            TokenKind::False => Lit::Bool(false),
            TokenKind::Nil => Lit::Nil,
            TokenKind::Number => match number_value(self.cursor.current()) {
                Some(n) => Lit::Number(n),
                None => return Err(self.error_at_current(ErrorCode::E1002, "Expect expression.")),
            },
            TokenKind::String => Lit::Str(string_value(self.cursor.current())),
            TokenKind::Identifier => {
                let token = self.cursor.advance()?;
                let name = self.interner.intern(&token.lexeme);
                return Ok(Expr::new(ExprKind::Variable(name), token.span));
            }
            TokenKind::LeftParen => {
                self.cursor.advance()?;
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(inner);
            }
            _ => return Err(self.error_at_current(ErrorCode::E1002, "Expect expression.")),
        };
        let token = self.cursor.advance()?;
        Ok(Expr::new(ExprKind::Literal(lit), token.span))
    }
}

/// Value of a number token. Tokens built by hand may lack the decoded
/// literal, in which case the lexeme is parsed.
fn number_value(token: &Token) -> Option<f64> {
    match &token.literal {
        Some(Literal::Number(n)) => Some(*n),
        _ => token.lexeme.parse().ok(),
    }
}

fn string_value(token: &Token) -> Rc<str> {
    match &token.literal {
        Some(Literal::Str(s)) => Rc::from(s.as_str()),
        _ => Rc::from(
            token
                .lexeme
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&token.lexeme),
        ),
    }
}
