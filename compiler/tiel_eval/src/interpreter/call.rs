//! Function calls.

use std::rc::Rc;

use tiel_ir::{Expr, Span};
use tracing::debug;

use super::{Interpreter, Interrupt};
use crate::diagnostics::CallFrame;
use crate::errors::{not_callable, wrong_arg_count};
use crate::{Environment, EvalError, FunctionValue, Value};

impl Interpreter {
    /// Callee first, then arguments left to right.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        span: Span,
        env: &Environment,
    ) -> Result<Value, EvalError> {
        let callee = self.evaluate(callee, env)?;
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg, env)?);
        }
        self.call_value(&callee, &values, span)
    }

    /// Call `callee` with evaluated arguments; `span` is the call site.
    pub fn call_value(&mut self, callee: &Value, args: &[Value], span: Span) -> Result<Value, EvalError> {
        match callee {
            Value::Function(func) => self.call_function(func, args, span),
            Value::Builtin(builtin) => {
                if args.len() != builtin.arity {
                    return Err(self.locate(wrong_arg_count(builtin.arity, args.len()), span));
                }
                self.tick(span)?;
                (builtin.func)(self, args, span).map_err(|e| self.locate(e, span))
            }
            other => Err(self.locate(not_callable(other), span)),
        }
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(name = %func.name, depth = self.call_stack.depth())
    )]
    fn call_function(
        &mut self,
        func: &Rc<FunctionValue>,
        args: &[Value],
        span: Span,
    ) -> Result<Value, EvalError> {
        if args.len() != func.arity() {
            return Err(self.locate(wrong_arg_count(func.arity(), args.len()), span));
        }
        self.tick(span)?;

        let frame = CallFrame {
            name: Rc::clone(&func.name),
            call_span: span,
        };
        if let Err(err) = self.call_stack.push(frame) {
            debug!(limit = self.call_stack.max_depth(), "call depth exceeded");
            return Err(self.call_stack.attach_backtrace(err));
        }

        let scope = func.closure.child();
        for (param, arg) in func.decl.params.iter().zip(args) {
            scope.define(*param, arg.clone());
        }
        let result = self.execute_block(&func.decl.body, &scope);
        self.call_stack.pop();

        match result {
            Ok(_) => Ok(Value::Nil),
            Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Error(err)) => Err(err),
        }
    }
}
