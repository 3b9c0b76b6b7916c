use crate::{
    error::Error,
    numerical::{eval::Eval, value::Value},
    symbolic::expr::{BinOpKind, Expr},
};
use log::trace;
use std::sync::Arc;

/// Applies a binary operation to two numbers.
///
/// Division by exactly zero (including `-0`) is an error. Exponentiation follows [`f64::powf`], so
/// a negative base with a fractional exponent produces `NaN` instead of an error.
pub fn apply(op: BinOpKind, left: f64, right: f64) -> Result<f64, Error> {
    Ok(match op {
        BinOpKind::Exp => left.powf(right),
        BinOpKind::Mul => left * right,
        BinOpKind::Div => {
            if right == 0.0 {
                return Err(Error::DivisionByZero);
            }
            left / right
        },
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
    })
}

/// Turns an evaluated operand back into a child of a symbolic remainder. The original child is
/// reused when evaluation did not change it.
fn into_operand(value: Value, original: &Arc<Expr>) -> Arc<Expr> {
    match value {
        Value::Number(n) if **original == n => Arc::clone(original),
        Value::Number(n) => Arc::new(Expr::Literal(n)),
        // a variable evaluates to itself
        Value::Symbolic(_) if matches!(**original, Expr::Variable(_)) => Arc::clone(original),
        Value::Symbolic(expr) => Arc::new(expr),
    }
}

/// Evaluates a binary expression.
///
/// Both sides are always evaluated. If both are numbers, the operation is applied. Otherwise, the
/// result is the same operation applied to the partially evaluated sides.
pub fn eval_binary(op: BinOpKind, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Value, Error> {
    let left = lhs.eval()?;
    let right = rhs.eval()?;

    match (left, right) {
        (Value::Number(left), Value::Number(right)) => apply(op, left, right).map(Value::Number),
        (left, right) => {
            let remainder = Expr::Binary(op, into_operand(left, lhs), into_operand(right, rhs));
            trace!("`{}` has a free variable, keeping it symbolic", remainder);
            Ok(Value::Symbolic(remainder))
        },
    }
}
