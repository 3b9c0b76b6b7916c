//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. It's similar to the
//! [`symcalc_parser::parser::ast::Expr`] nodes produced by [`symcalc_parser`], without the source
//! spans, parentheses and unary plus signs.
//!
//! If you have a [`symcalc_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using
//! the [`From`] trait.
//!
//! # Differentiation
//!
//! [`derivative()`] applies the usual calculus rules (sum, difference, product, quotient and power
//! rules) structurally, without trying to make the result look nice.
//!
//! # Simplification
//!
//! [`simplify()`] cleans an expression up by folding constants and removing identities such as
//! `x * 1` or `x + 0`. The derivative of `x * x` is `1 * x + x * 1`, which simplifies to `x + x`:
//!
//! ```
//! use symcalc_compute::symbolic::{derivative, expr::Expr, simplify};
//! use symcalc_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("x * x").unwrap();
//! let expr: Expr = parser.try_parse_full::<AstExpr>().unwrap().into();
//!
//! let derivative = simplify(&derivative(&expr, "x").unwrap()).unwrap();
//! assert_eq!(derivative.to_string(), "(x + x)");
//! ```
//!
//! The rewrites that were applied can be recorded with [`simplify_with_steps()`].

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
