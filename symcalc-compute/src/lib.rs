//! Evaluation, differentiation and simplification of symcalc expressions.
//!
//! Expressions are parsed with [`symcalc_parser`] and lowered into a
//! [`symbolic::Expr`], which every algorithm in this crate works with:
//!
//! - [`numerical::eval`] reduces an expression to a number, or to a symbolic remainder when it
//!   contains a free variable;
//! - [`symbolic::derivative()`] differentiates an expression with respect to a variable;
//! - [`symbolic::simplify()`] folds constants and removes algebraic identities.
//!
//! ```
//! use symcalc_compute::{numerical::{eval, Value}, symbolic::Expr};
//! use symcalc_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("diff(x^2, x)").unwrap();
//! let expr: Expr = parser.try_parse_full::<AstExpr>().unwrap().into();
//!
//! let value = eval(&expr).unwrap();
//! assert!(value.is_symbolic());
//! assert_eq!(value.to_string(), "(2 * x)");
//! ```

pub mod error;
pub mod numerical;
pub mod symbolic;

pub use error::Error;
