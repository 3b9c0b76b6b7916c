//! Simplification rules for negation.

use crate::symbolic::{
    expr::{Expr, UnaryOp},
    simplify::{rules::do_negate, step::Step},
    step_collector::StepCollector,
};
use std::sync::Arc;

/// `-0 = 0`
pub fn negate_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_negate(expr, |operand| {
        if **operand == 0.0 {
            Some(Arc::new(Expr::Literal(0.0)))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::NegZero);
    Some(opt)
}

/// `-(-a) = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_negate(expr, |operand| match &**operand {
        Expr::Unary(UnaryOp::Neg, inner) => Some(Arc::clone(inner)),
        _ => None,
    })?;

    step_collector.push(Step::DoubleNeg);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    negate_zero(expr, step_collector)
        .or_else(|| double_negation(expr, step_collector))
}
