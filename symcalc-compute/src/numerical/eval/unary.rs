use crate::{
    error::Error,
    numerical::{eval::Eval, value::Value},
    symbolic::expr::{Expr, UnaryOp},
};
use std::sync::Arc;

/// Evaluates a unary expression.
pub fn eval_unary(op: UnaryOp, operand: &Arc<Expr>) -> Result<Value, Error> {
    Ok(match (op, operand.eval()?) {
        (UnaryOp::Neg, Value::Number(n)) => Value::Number(-n),
        (UnaryOp::Neg, Value::Symbolic(remainder)) => Value::Symbolic(Expr::neg(remainder)),
    })
}
