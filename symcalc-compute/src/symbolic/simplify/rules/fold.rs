//! Constant folding.

use crate::{
    error::Error,
    numerical::eval::apply,
    symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector},
};
use std::sync::Arc;

/// Replaces a binary operation on two literals with its result.
///
/// `2+3 = 5`
/// `2^3 = 8`
///
/// Returns [`Err`] if the operation is a division by the literal zero.
pub fn fold_constants(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Arc<Expr>>, Error> {
    let Expr::Binary(op, lhs, rhs) = expr else {
        return Ok(None);
    };
    let (Some(left), Some(right)) = (lhs.as_literal(), rhs.as_literal()) else {
        return Ok(None);
    };

    let value = apply(*op, left, right)?;
    step_collector.push(Step::FoldConstants);
    Ok(Some(Arc::new(Expr::Literal(value))))
}
