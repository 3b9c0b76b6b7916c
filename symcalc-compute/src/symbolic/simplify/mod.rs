//! Algebraic simplification of expressions.
//!
//! Simplification works bottom-up: the children of a node are simplified first, then the rules
//! in [`rules`] are tried on the node itself. The first rule that applies replaces the node. Only
//! one rewrite is applied per node, which is enough because every rule either returns one of the
//! node's (already simplified) children or a literal.
//!
//! The rules are:
//!
//! - constant folding, when both operands of a binary operation are literals;
//! - `a+0 = a`, `0+a = a`, `a-0 = a`;
//! - `a*1 = a`, `1*a = a`, `a*0 = 0`, `0*a = 0`;
//! - `a^1 = a`, `a^0 = 1` (for `a` other than the literal zero), `0^a = 0`;
//! - `-0 = 0`, `-(-a) = a`.
//!
//! `diff` nodes keep their place; only the expression inside them is simplified.
//!
//! ```
//! use symcalc_compute::symbolic::{expr::Expr, simplify};
//!
//! // (5 * 2) + 1 = 11
//! let expr = Expr::add(Expr::mul(Expr::lit(5.0), Expr::lit(2.0)), Expr::lit(1.0));
//! assert_eq!(simplify(&expr).unwrap(), Expr::lit(11.0));
//! ```

pub mod rules;
pub mod step;

use crate::error::Error;
use log::trace;
use std::sync::Arc;
use super::{expr::Expr, step_collector::StepCollector};
use step::Step;

/// Simplifies the children of the given node, reusing the node if none of them changed.
fn simplify_children(expr: &Arc<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Result<Arc<Expr>, Error> {
    Ok(match &**expr {
        Expr::Literal(_) | Expr::Variable(_) => Arc::clone(expr),
        Expr::Unary(op, operand) => {
            let new_operand = simplify_node(operand, step_collector)?;
            if Arc::ptr_eq(&new_operand, operand) {
                Arc::clone(expr)
            } else {
                Arc::new(Expr::Unary(*op, new_operand))
            }
        },
        Expr::Binary(op, lhs, rhs) => {
            let new_lhs = simplify_node(lhs, step_collector)?;
            let new_rhs = simplify_node(rhs, step_collector)?;
            if Arc::ptr_eq(&new_lhs, lhs) && Arc::ptr_eq(&new_rhs, rhs) {
                Arc::clone(expr)
            } else {
                Arc::new(Expr::Binary(*op, new_lhs, new_rhs))
            }
        },
        Expr::Diff(body, var) => {
            let new_body = simplify_node(body, step_collector)?;
            if Arc::ptr_eq(&new_body, body) {
                Arc::clone(expr)
            } else {
                Arc::new(Expr::Diff(new_body, var.clone()))
            }
        },
    })
}

/// Simplifies the given node bottom-up.
fn simplify_node(expr: &Arc<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Result<Arc<Expr>, Error> {
    let node = simplify_children(expr, step_collector)?;
    match rules::all(&node, step_collector)? {
        Some(rewritten) => {
            trace!("`{}` => `{}`", node, rewritten);
            Ok(rewritten)
        },
        None => Ok(node),
    }
}

/// Simplifies the given expression, returning the simplified expression.
///
/// Returns [`Err`] if constant folding divides by the literal zero.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, reporting every rewrite that was applied to the given step
/// collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    let simplified = simplify_node(&Arc::new(expr.clone()), step_collector)?;
    Ok(Arc::try_unwrap(simplified).unwrap_or_else(|shared| (*shared).clone()))
}

/// Simplifies the given expression, returning the simplified expression and the steps taken.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickcheck::{QuickCheck, TestResult};
    use super::*;

    use crate::symbolic::expr::arbitrary::SmallExpr;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn leaves_unchanged() {
        assert_eq!(simplify(&Expr::lit(3.0)).unwrap(), Expr::lit(3.0));
        assert_eq!(simplify(&x()).unwrap(), x());
    }

    #[test]
    fn fold_constants() {
        let expr = Expr::add(Expr::mul(Expr::lit(5.0), Expr::lit(2.0)), Expr::lit(1.0));
        assert_eq!(simplify(&expr).unwrap(), Expr::lit(11.0));

        let expr = Expr::pow(Expr::lit(0.0), Expr::lit(0.0));
        assert_eq!(simplify(&expr).unwrap(), Expr::lit(1.0));
    }

    #[test]
    fn fold_division_by_zero() {
        let expr = Expr::mul(x(), Expr::div(Expr::lit(1.0), Expr::lit(0.0)));
        assert_eq!(simplify(&expr), Err(Error::DivisionByZero));
    }

    #[test]
    fn symbolic_division_by_zero_is_kept() {
        let expr = Expr::div(x(), Expr::lit(0.0));
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn add_zero() {
        assert_eq!(simplify(&Expr::add(x(), Expr::lit(0.0))).unwrap(), x());
        assert_eq!(simplify(&Expr::add(Expr::lit(0.0), x())).unwrap(), x());
    }

    #[test]
    fn subtract_zero() {
        assert_eq!(simplify(&Expr::sub(x(), Expr::lit(0.0))).unwrap(), x());

        // `0 - x` is not rewritten
        let expr = Expr::sub(Expr::lit(0.0), x());
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn multiply_identities() {
        assert_eq!(simplify(&Expr::mul(x(), Expr::lit(1.0))).unwrap(), x());
        assert_eq!(simplify(&Expr::mul(Expr::lit(1.0), x())).unwrap(), x());
        assert_eq!(simplify(&Expr::mul(x(), Expr::lit(0.0))).unwrap(), Expr::lit(0.0));
        assert_eq!(simplify(&Expr::mul(Expr::lit(0.0), x())).unwrap(), Expr::lit(0.0));
    }

    #[test]
    fn power_identities() {
        assert_eq!(simplify(&Expr::pow(x(), Expr::lit(1.0))).unwrap(), x());
        assert_eq!(simplify(&Expr::pow(x(), Expr::lit(0.0))).unwrap(), Expr::lit(1.0));
        assert_eq!(simplify(&Expr::pow(Expr::lit(0.0), x())).unwrap(), Expr::lit(0.0));
    }

    #[test]
    fn negation() {
        assert_eq!(simplify(&Expr::neg(Expr::neg(x()))).unwrap(), x());
        assert_eq!(simplify(&Expr::neg(Expr::lit(0.0))).unwrap(), Expr::lit(0.0));
        assert_eq!(
            simplify(&Expr::neg(Expr::mul(x(), Expr::lit(0.0)))).unwrap(),
            Expr::lit(0.0),
        );

        // a negated literal is not folded
        assert_eq!(simplify(&Expr::neg(Expr::lit(2.0))).unwrap(), Expr::neg(Expr::lit(2.0)));
    }

    #[test]
    fn nested_rewrites() {
        // ((x + 0) * 1)^(2 - 1) = x
        let expr = Expr::pow(
            Expr::mul(Expr::add(x(), Expr::lit(0.0)), Expr::lit(1.0)),
            Expr::sub(Expr::lit(2.0), Expr::lit(1.0)),
        );
        assert_eq!(simplify(&expr).unwrap(), x());
    }

    #[test]
    fn diff_body_is_simplified() {
        let expr = Expr::diff(Expr::add(x(), Expr::lit(0.0)), "x");
        assert_eq!(simplify(&expr).unwrap(), Expr::diff(x(), "x"));
    }

    #[test]
    fn unchanged_subtrees_are_shared() {
        let shared = Arc::new(Expr::mul(x(), Expr::var("y")));
        let expr = Arc::new(Expr::add(Arc::clone(&shared), Expr::lit(0.0)));
        let simplified = simplify_node(&expr, &mut ()).unwrap();
        assert!(Arc::ptr_eq(&simplified, &shared));
    }

    #[test]
    fn steps() {
        let expr = Expr::add(
            Expr::mul(x(), Expr::add(Expr::lit(0.5), Expr::lit(0.5))),
            Expr::neg(Expr::neg(Expr::lit(0.0))),
        );
        let (simplified, steps) = simplify_with_steps(&expr).unwrap();
        assert_eq!(simplified, x());
        assert_eq!(steps, vec![
            Step::FoldConstants,
            Step::MulOne,
            Step::NegZero,
            Step::NegZero,
            Step::AddZero,
        ]);
    }

    #[test]
    fn no_steps_when_already_simple() {
        let (_, steps) = simplify_with_steps(&Expr::add(x(), Expr::var("y"))).unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn idempotent() {
        fn prop_simplify_idempotent(expr: SmallExpr) -> TestResult {
            // division by zero while folding
            let Ok(once) = simplify(&expr.0) else {
                return TestResult::discard();
            };

            // `NaN` is never equal to itself
            if once.contains_nan() {
                return TestResult::discard();
            }

            match simplify(&once) {
                Ok(twice) => TestResult::from_bool(twice == once),
                Err(_) => TestResult::failed(),
            }
        }

        QuickCheck::new()
            .tests(500)
            .quickcheck(prop_simplify_idempotent as fn(SmallExpr) -> TestResult);
    }
}
