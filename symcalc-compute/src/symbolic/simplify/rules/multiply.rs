//! Simplification rules for multiplication.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use std::sync::Arc;

/// `a*1 = a`
/// `1*a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if **rhs == 1.0 {
            Some(Arc::clone(lhs))
        } else if **lhs == 1.0 {
            Some(Arc::clone(rhs))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MulOne);
    Some(opt)
}

/// `a*0 = 0`
/// `0*a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (**rhs == 0.0 || **lhs == 0.0).then(|| Arc::new(Expr::Literal(0.0)))
    })?;

    step_collector.push(Step::MulZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    multiply_one(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
}
