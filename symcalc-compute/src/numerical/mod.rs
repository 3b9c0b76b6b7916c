//! Numerical evaluation of expressions.
//!
//! Evaluation reduces an [`Expr`](crate::symbolic::expr::Expr) to a number whenever every leaf
//! of the tree is a literal. When a free variable is found instead, evaluation does not fail: it
//! reduces everything it can and returns the rest as a [`Value::Symbolic`] remainder.

pub mod eval;
pub mod fmt;
pub mod value;

pub use eval::{eval, Eval};
pub use value::Value;
