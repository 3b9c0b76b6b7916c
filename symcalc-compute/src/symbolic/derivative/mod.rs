//! Symbolic differentiation.
//!
//! [`derivative`] walks the expression and applies one calculus rule per kind of node. The result
//! is **not** simplified: the rules build their output mechanically, so the derivative of `x^2` is
//! `(2 * (x ^ 1)) * 1`. Pass the result to [`simplify`](super::simplify()) to clean it up.

use crate::error::Error;
use log::trace;
use std::sync::Arc;
use super::expr::{BinOpKind, Expr, UnaryOp};

/// Returns the value of the exponent if it is a constant, that is, a literal or a negated literal.
fn constant_exponent(exponent: &Expr) -> Option<f64> {
    match exponent {
        Expr::Literal(n) => Some(*n),
        Expr::Unary(UnaryOp::Neg, operand) => operand.as_literal().map(|n| -n),
        _ => None,
    }
}

/// `(u * v)' = u' * v + u * v'`
fn product_rule(u: &Arc<Expr>, v: &Arc<Expr>, du: Expr, dv: Expr) -> Expr {
    Expr::add(
        Expr::mul(du, Arc::clone(v)),
        Expr::mul(Arc::clone(u), dv),
    )
}

/// `(u / v)' = (u' * v - u * v') / v^2`
fn quotient_rule(u: &Arc<Expr>, v: &Arc<Expr>, du: Expr, dv: Expr) -> Expr {
    Expr::div(
        Expr::sub(
            Expr::mul(du, Arc::clone(v)),
            Expr::mul(Arc::clone(u), dv),
        ),
        Expr::pow(Arc::clone(v), Expr::lit(2.0)),
    )
}

/// `(u^n)' = n * u^(n - 1) * u'`, where `n` is a constant.
fn power_rule(u: &Arc<Expr>, n: f64, du: Expr) -> Expr {
    Expr::mul(
        Expr::mul(Expr::lit(n), Expr::pow(Arc::clone(u), Expr::lit(n - 1.0))),
        du,
    )
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Every variable other than `with` is treated as a constant. Returns [`Err`] if the expression
/// contains a power whose exponent is not a constant, or a `diff` node.
///
/// ```
/// use symcalc_compute::symbolic::{derivative::derivative, expr::Expr};
///
/// let f = Expr::mul(Expr::var("x"), Expr::var("y"));
/// let df = derivative(&f, "x").unwrap();
/// assert_eq!(df.to_string(), "((1 * y) + (x * 0))");
/// ```
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    trace!("d/d{} `{}`", with, f);
    let expr = match f {
        Expr::Literal(_) => Expr::lit(0.0),
        Expr::Variable(name) => Expr::lit(if name == with { 1.0 } else { 0.0 }),
        Expr::Unary(op, operand) => Expr::Unary(*op, Arc::new(derivative(operand, with)?)),
        Expr::Binary(op, u, v) => {
            let du = derivative(u, with)?;
            match op {
                BinOpKind::Add => Expr::add(du, derivative(v, with)?),
                BinOpKind::Sub => Expr::sub(du, derivative(v, with)?),
                BinOpKind::Mul => product_rule(u, v, du, derivative(v, with)?),
                BinOpKind::Div => quotient_rule(u, v, du, derivative(v, with)?),
                BinOpKind::Exp => {
                    let n = constant_exponent(v)
                        .ok_or_else(|| Error::NonConstantExponent((**v).clone()))?;
                    power_rule(u, n, du)
                },
            }
        },
        Expr::Diff(..) => return Err(Error::NestedDerivative),
    };

    Ok(expr)
}
