//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the top node of the expression; its children are
//! expected to be simplified already.

pub mod add;
pub mod fold;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod subtract;

use crate::{
    error::Error,
    symbolic::{expr::{BinOpKind, Expr, UnaryOp}, step_collector::StepCollector},
};
use std::sync::Arc;
use super::step::Step;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Arc<Expr>, &Arc<Expr>) -> Option<Arc<Expr>>,
) -> Option<Arc<Expr>> {
    match expr {
        Expr::Binary(expr_op, lhs, rhs) if *expr_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a negation, calls the given transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_negate(expr: &Expr, f: impl Fn(&Arc<Expr>) -> Option<Arc<Expr>>) -> Option<Arc<Expr>> {
    match expr {
        Expr::Unary(UnaryOp::Neg, operand) => f(operand),
        _ => None,
    }
}

/// Applies all rules, stopping at the first one that applies.
///
/// Constant folding is tried before any identity, so that `0 ^ 0` folds to `1` instead of being
/// rewritten by an identity on `0`. Returns [`Err`] if folding divides by zero.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Arc<Expr>>, Error> {
    if let Some(folded) = fold::fold_constants(expr, step_collector)? {
        return Ok(Some(folded));
    }

    Ok(negate::all(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| subtract::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector)))
}
