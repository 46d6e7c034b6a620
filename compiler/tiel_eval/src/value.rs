//! Runtime values.
//!
//! Values are cheap to clone: strings and functions are reference counted,
//! everything else is `Copy`-sized.

use std::fmt;
use std::rc::Rc;

use tiel_ir::FunctionDecl;

use crate::builtins::Builtin;
use crate::Environment;

/// A TiEL runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    /// User-defined function together with the scope it was declared in.
    Function(Rc<FunctionValue>),
    /// Native function such as `print`.
    Builtin(Builtin),
}

/// A closure: declaration plus defining environment.
pub struct FunctionValue {
    pub decl: Rc<FunctionDecl>,
    pub closure: Environment,
    /// Resolved display name, kept so `<fn name>` needs no interner.
    pub name: Rc<str>,
}

impl FunctionValue {
    pub fn new(decl: Rc<FunctionDecl>, closure: Environment, name: &str) -> Self {
        FunctionValue {
            decl,
            closure,
            name: Rc::from(name),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }
}

impl fmt::Debug for FunctionValue {
    // The closure is left out: it may (indirectly) contain this function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Name of the value's kind as shown in error notes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) | Value::Builtin(_) => "function",
        }
    }

    /// `nil` and `false` are falsy; every other value is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Builtin(_))
    }

    /// Language-level equality used by `==` and `!=`.
    ///
    /// Values of different kinds are never equal. Numbers follow IEEE 754,
    /// so `NaN` is not equal to itself. Functions compare by identity.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "language equality is IEEE equality")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => write!(f, "<fn {}>", func.name),
            Value::Builtin(_) => write!(f, "<native fn>"),
        }
    }
}

/// Plain decimal for magnitudes in `[1e-3, 1e7)` and for zero, without a
/// trailing `.0`. Anything else uses scientific form with an explicit
/// mantissa fraction: `1.0E21`, `2.5E-4`.
#[allow(clippy::float_cmp, reason = "zero is matched exactly")]
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return n.to_string();
    }
    let scientific = format!("{n:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Function(func) => write!(f, "Function({})", func.name),
            Value::Builtin(b) => write!(f, "Builtin({})", b.name),
        }
    }
}
