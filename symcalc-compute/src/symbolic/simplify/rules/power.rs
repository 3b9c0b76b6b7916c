//! Simplification rules for exponentiation.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use std::sync::Arc;

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        (**rhs == 1.0).then(|| Arc::clone(lhs))
    })?;

    step_collector.push(Step::PowOne);
    Some(opt)
}

/// `a^0 = 1`, where `a` is not the literal zero
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        (**rhs == 0.0 && **lhs != 0.0).then(|| Arc::new(Expr::Literal(1.0)))
    })?;

    step_collector.push(Step::PowZero);
    Some(opt)
}

/// `0^a = 0`
pub fn zero_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, _| {
        (**lhs == 0.0).then(|| Arc::new(Expr::Literal(0.0)))
    })?;

    step_collector.push(Step::ZeroPow);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Arc<Expr>> {
    power_one(expr, step_collector)
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| zero_power(expr, step_collector))
}
