//! Tokenizer and parser for symcalc expressions.
//!
//! The entry point is the [`Parser`](parser::Parser) type, which turns a line of source code into
//! the [`Expr`](parser::ast::Expr) abstract syntax tree:
//!
//! ```
//! use symcalc_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("diff(x^2, x) + 1").unwrap();
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..16);
//! ```

pub mod parser;
pub mod tokenizer;
