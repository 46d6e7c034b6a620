//! Binary and unary operator semantics.
//!
//! Errors come back without a span; the interpreter points them at the
//! operator.

use tiel_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, operand_must_be_number, operands_must_be_numbers};
use crate::{EvalError, Value};

/// Apply a (non-short-circuit) binary operator to evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(right))),
        BinaryOp::Add => numbers(op, left, right).map(|(a, b)| Value::Number(a + b)),
        BinaryOp::Sub => numbers(op, left, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(op, left, right).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => {
            let (a, b) = numbers(op, left, right)?;
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::Number(a / b))
        }
        BinaryOp::Lt => numbers(op, left, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers(op, left, right).map(|(a, b)| Value::Bool(a <= b)),
        BinaryOp::Gt => numbers(op, left, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers(op, left, right).map(|(a, b)| Value::Bool(a >= b)),
    }
}

#[inline]
fn numbers(op: BinaryOp, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers(op.as_symbol(), left, right)),
    }
}

/// Apply a unary operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(op.as_symbol(), operand)),
        },
    }
}

#[cfg(test)]
mod tests;
