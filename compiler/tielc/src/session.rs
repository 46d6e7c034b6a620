//! A running interpreter with its root environment.
//!
//! One `Session` backs a whole file run or a whole REPL: definitions made
//! by one input are visible to the next.

use tiel_eval::{
    stdout_handler, Environment, EvalError, Interpreter, InterpreterConfig, SharedPrintHandler,
    Value,
};
use tiel_ir::{AstPrinter, Program, SharedInterner, StringInterner};
use tiel_parse::SyntaxError;
use tracing::debug;

use crate::TielError;

pub struct Session {
    interner: SharedInterner,
    interpreter: Interpreter,
    root: Environment,
}

impl Session {
    /// A session printing to stdout.
    pub fn new(config: InterpreterConfig) -> Self {
        Self::with_print_handler(config, stdout_handler())
    }

    pub fn with_print_handler(config: InterpreterConfig, handler: SharedPrintHandler) -> Self {
        let interner = SharedInterner::new();
        let interpreter = Interpreter::new(interner.clone())
            .with_config(config)
            .with_print_handler(handler);
        let root = interpreter.root_environment();
        Session {
            interner,
            interpreter,
            root,
        }
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn root(&self) -> &Environment {
        &self.root
    }

    #[inline]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn parse(&self, source: &str) -> Result<Program, SyntaxError> {
        tiel_parse::parse_source(source, &self.interner)
    }

    /// S-expression dump of `program`, one line per top-level statement.
    pub fn print_ast(&self, program: &Program) -> String {
        AstPrinter::new(&self.interner).print_program(program)
    }

    /// Evaluate an already parsed program. The step budget restarts for
    /// every program.
    pub fn execute(&mut self, program: &Program) -> Result<Value, EvalError> {
        self.interpreter.reset_steps();
        let result = self.interpreter.interpret(program, &self.root);
        debug!(steps = self.interpreter.steps(), ok = result.is_ok(), "executed");
        result
    }

    /// Lex, parse and evaluate `source`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run(&mut self, source: &str) -> Result<Value, TielError> {
        let program = self.parse(source)?;
        Ok(self.execute(&program)?)
    }

    /// Like [`Session::run`], but a trailing expression may omit its `;`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = line.len()))]
    pub fn run_line(&mut self, line: &str) -> Result<Value, TielError> {
        let program = tiel_parse::parse_repl(line, &self.interner)?;
        Ok(self.execute(&program)?)
    }
}
