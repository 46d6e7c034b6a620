//! Native functions bound in the root environment.

use std::fmt;

use tiel_ir::Span;

use crate::{Environment, EvalError, Interpreter, Value};

/// Signature of a native function body. Arity is checked by the caller.
pub type BuiltinFn = fn(&mut Interpreter, &[Value], Span) -> Result<Value, EvalError>;

/// A native function value.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

pub const BUILTINS: &[Builtin] = &[Builtin {
    name: "print",
    arity: 1,
    func: builtin_print,
}];

/// `print(value)`: the value's text plus a newline.
fn builtin_print(interp: &mut Interpreter, args: &[Value], _span: Span) -> Result<Value, EvalError> {
    if let Some(value) = args.first() {
        interp.print_handler().println(&value.to_string());
    }
    Ok(Value::Nil)
}

/// Bind every builtin in `env`.
pub fn register_builtins(interp: &Interpreter, env: &Environment) {
    for builtin in BUILTINS {
        let name = interp.interner().intern(builtin.name);
        env.define(name, Value::Builtin(*builtin));
    }
}
