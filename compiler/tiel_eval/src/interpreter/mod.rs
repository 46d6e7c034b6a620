//! Tree-walking interpreter.
//!
//! `evaluate` computes expressions, `execute` runs statements, and
//! `interpret` runs a whole program. `return` unwinds through `execute` as
//! [`Interrupt::Return`] until a function call catches it.
//!
//! Scopes: a block body, a function body and each loop iteration get a
//! fresh child environment. `if` branches run in the current one.

mod call;

use std::rc::Rc;

use tiel_ir::{Expr, ExprKind, Lit, LogicalOp, Program, SharedInterner, Span, Stmt, StmtKind, StringInterner};
use tiel_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::builtins::register_builtins;
use crate::diagnostics::CallStack;
use crate::errors::{condition_not_boolean, step_budget_exhausted, undefined_variable};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, EvalError, FunctionValue, UndefinedName, Value};

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Resource limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    pub max_call_depth: usize,
    /// Loop iterations plus calls allowed per run; `None` is unlimited.
    pub max_steps: Option<u64>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_steps: None,
        }
    }
}

/// Non-local exit from `execute`.
#[derive(Debug)]
pub enum Interrupt {
    /// A `return` statement on its way to the enclosing call.
    Return(Value),
    Error(EvalError),
}

impl From<EvalError> for Interrupt {
    fn from(err: EvalError) -> Self {
        Interrupt::Error(err)
    }
}

/// Evaluator state shared across statements of one session.
pub struct Interpreter {
    interner: SharedInterner,
    config: InterpreterConfig,
    call_stack: CallStack,
    steps: u64,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout with default limits.
    pub fn new(interner: SharedInterner) -> Self {
        let config = InterpreterConfig::default();
        Interpreter {
            interner,
            call_stack: CallStack::new(config.max_call_depth),
            config,
            steps: 0,
            print_handler: stdout_handler(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self.call_stack = CallStack::new(config.max_call_depth);
        self
    }

    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn config(&self) -> InterpreterConfig {
        self.config
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Steps taken since construction or the last [`Self::reset_steps`].
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn reset_steps(&mut self) {
        self.steps = 0;
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// A new root environment holding the builtins.
    pub fn root_environment(&self) -> Environment {
        let env = Environment::new();
        register_builtins(self, &env);
        env
    }

    /// Run `program` in `env`; the result is the last statement's value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn interpret(&mut self, program: &Program, env: &Environment) -> Result<Value, EvalError> {
        let mut last = Value::Nil;
        for stmt in &program.statements {
            match self.execute(stmt, env) {
                Ok(value) => last = value,
                // Only reachable for hand-built trees; the parser rejects
                // top-level `return`.
                Err(Interrupt::Return(value)) => return Ok(value),
                Err(Interrupt::Error(err)) => {
                    self.call_stack.clear();
                    debug!(code = %err.code(), "evaluation failed");
                    return Err(err);
                }
            }
        }
        Ok(last)
    }

    /// Evaluate an expression.
    pub fn evaluate(&mut self, expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(literal_value(lit)),
            ExprKind::Variable(name) => env
                .get(*name)
                .map_err(|e| self.undefined(e, expr.span)),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value, env)?;
                env.assign(*name, value.clone())
                    .map_err(|e| self.undefined(e, expr.span))?;
                Ok(value)
            }
            ExprKind::Binary {
                op,
                op_span,
                left,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                evaluate_binary(*op, &left, &right).map_err(|e| self.locate(e, *op_span))
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.evaluate(left, env)?.is_truthy();
                match op {
                    LogicalOp::Or if left => Ok(Value::Bool(true)),
                    LogicalOp::And if !left => Ok(Value::Bool(false)),
                    _ => Ok(Value::Bool(self.evaluate(right, env)?.is_truthy())),
                }
            }
            ExprKind::Unary { op, operand } => {
                let value = self.evaluate(operand, env)?;
                evaluate_unary(*op, &value).map_err(|e| self.locate(e, expr.span))
            }
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span, env),
        }
    }

    /// Execute a statement. Its value is the value of the expression it
    /// ends with, or `nil`.
    pub fn execute(&mut self, stmt: &Stmt, env: &Environment) -> Result<Value, Interrupt> {
        ensure_sufficient_stack(|| self.exec_inner(stmt, env))
    }

    fn exec_inner(&mut self, stmt: &Stmt, env: &Environment) -> Result<Value, Interrupt> {
        match &stmt.kind {
            StmtKind::Expression(expr) => Ok(self.evaluate(expr, env)?),
            StmtKind::Var { name, init } => {
                let value = self.evaluate(init, env)?;
                env.define(*name, value);
                Ok(Value::Nil)
            }
            StmtKind::Function(decl) => {
                let name = self.interner.lookup(decl.name);
                let func = FunctionValue::new(Rc::clone(decl), env.clone(), name);
                env.define(decl.name, Value::Function(Rc::new(func)));
                Ok(Value::Nil)
            }
            StmtKind::Block(stmts) => self.execute_block(stmts, &env.child()),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.condition(cond, env)? {
                    self.execute(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, env)
                } else {
                    Ok(Value::Nil)
                }
            }
            StmtKind::While { cond, body } => {
                while self.condition(cond, env)? {
                    self.tick(body.span)?;
                    self.execute(body, &env.child())?;
                }
                Ok(Value::Nil)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.evaluate(expr, env)?,
                    None => Value::Nil,
                };
                Err(Interrupt::Return(value))
            }
        }
    }

    /// Run `stmts` in `env` (already the block's own scope).
    pub fn execute_block(&mut self, stmts: &[Stmt], env: &Environment) -> Result<Value, Interrupt> {
        let mut last = Value::Nil;
        for stmt in stmts {
            last = self.execute(stmt, env)?;
        }
        Ok(last)
    }

    fn condition(&mut self, cond: &Expr, env: &Environment) -> Result<bool, EvalError> {
        match self.evaluate(cond, env)? {
            Value::Bool(b) => Ok(b),
            other => Err(self.locate(condition_not_boolean(&other), cond.span)),
        }
    }

    /// Charge one step against the budget.
    fn tick(&mut self, span: Span) -> Result<(), EvalError> {
        self.steps = self.steps.saturating_add(1);
        match self.config.max_steps {
            Some(limit) if self.steps > limit => {
                debug!(limit, "step budget exhausted");
                Err(self.locate(step_budget_exhausted(limit), span))
            }
            _ => Ok(()),
        }
    }

    /// Point `err` at `span` and record the live call stack.
    #[cold]
    fn locate(&self, err: EvalError, span: Span) -> EvalError {
        self.call_stack.attach_backtrace(err.at(span))
    }

    #[cold]
    fn undefined(&self, err: UndefinedName, span: Span) -> EvalError {
        let name = self.interner.lookup(err.0);
        self.locate(undefined_variable(name), span)
    }
}

fn literal_value(lit: &Lit) -> Value {
    match lit {
        Lit::Nil => Value::Nil,
        Lit::Bool(b) => Value::Bool(*b),
        Lit::Number(n) => Value::Number(*n),
        Lit::Str(s) => Value::Str(Rc::clone(s)),
    }
}
