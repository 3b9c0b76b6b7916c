//! Simplification rules for subtraction.
//!
//! There is no `0-a = -a` rule; a leading zero is kept.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use std::sync::Arc;

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        (**rhs == 0.0).then(|| Arc::clone(lhs))
    })?;

    step_collector.push(Step::SubZero);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    subtract_zero(expr, step_collector)
}
