//! Declarations and statements.

use std::rc::Rc;

use tiel_diagnostic::ErrorCode;
use tiel_ir::{FunctionDecl, Program, Stmt, StmtKind, Token, TokenKind};
use tiel_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ParseError, Parser, MAX_PARAMS};

impl<I, E> Parser<'_, I>
where
    I: Iterator<Item = Result<Token, E>>,
    E: From<ParseError>,
{
    /// Parse declarations until `Eof`.
    pub fn parse_program(mut self) -> Result<Program, E> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_declaration()?);
        }
        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    fn parse_declaration(&mut self) -> Result<Stmt, E> {
        match self.cursor.current_kind() {
            TokenKind::Fun => self.parse_function(),
            TokenKind::Var => self.parse_var(),
            _ => self.parse_statement(),
        }
    }

    /// `fun name(a, b) { ... }`
    fn parse_function(&mut self) -> Result<Stmt, E> {
        let start = self.cursor.advance()?.span;
        let name = self.expect_ident("Expect function name.")?;
        trace!(name = self.interner.lookup(name), "parse_function");

        self.expect(TokenKind::LeftParen, "Expect '(' after function name.")?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_PARAMS {
                    return Err(
                        self.error_at_current(ErrorCode::E1005, "Can't have more than 255 parameters.")
                    );
                }
                params.push(self.expect_ident("Expect parameter name.")?);
                if !self.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.expect(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        self.function_depth += 1;
        let body = self.parse_block_body();
        self.function_depth -= 1;
        let body = body?;

        let span = start.to(self.cursor.previous_span());
        let decl = FunctionDecl {
            name,
            params,
            body,
            span,
        };
        Ok(Stmt::new(StmtKind::Function(Rc::new(decl)), span))
    }

    /// `var name = init;`
    fn parse_var(&mut self) -> Result<Stmt, E> {
        let start = self.cursor.advance()?.span;
        let name = self.expect_ident("Expect variable name.")?;
        self.expect(TokenKind::Equal, "Expect '=' after variable name.")?;
        let init = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        let span = start.to(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Var { name, init }, span))
    }

    fn parse_statement(&mut self) -> Result<Stmt, E> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, E> {
        match self.cursor.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::LeftBrace => {
                let start = self.cursor.advance()?.span;
                let stmts = self.parse_block_body()?;
                let span = start.to(self.cursor.previous_span());
                Ok(Stmt::new(StmtKind::Block(stmts), span))
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Declarations up to and including the closing `}`; the `{` has
    /// already been consumed.
    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, E> {
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_declaration()?);
        }
        self.expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(stmts)
    }

    fn parse_if(&mut self) -> Result<Stmt, E> {
        let start = self.cursor.advance()?.span;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then, "Expect 'then' after if condition.")?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else)? {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        let span = start.to(self.cursor.previous_span());
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn parse_while(&mut self) -> Result<Stmt, E> {
        let start = self.cursor.advance()?.span;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Do, "Expect 'do' after condition.")?;
        let body = Box::new(self.parse_statement()?);
        let span = start.to(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    fn parse_return(&mut self) -> Result<Stmt, E> {
        if self.function_depth == 0 {
            return Err(self.error_at_current(ErrorCode::E1004, "Can't return from top-level code."));
        }
        let start = self.cursor.advance()?.span;
        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;
        let span = start.to(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, E> {
        let expr = self.parse_expr()?;
        if !(self.repl && self.cursor.is_at_end()) {
            self.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        }
        let span = expr.span.to(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }
}
