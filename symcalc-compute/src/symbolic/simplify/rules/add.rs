//! Simplification rules for addition.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use std::sync::Arc;

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if **rhs == 0.0 {
            Some(Arc::clone(lhs))
        } else if **lhs == 0.0 {
            Some(Arc::clone(rhs))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    add_zero(expr, step_collector)
}
