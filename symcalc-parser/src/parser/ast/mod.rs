//! Nodes of the abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! Every node stores the region of the source code it was parsed from, so that later stages can
//! point at the offending part of the input when reporting an error.

pub mod binary;
pub mod diff;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use diff::Diff;
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitSym};
pub use paren::Paren;
pub use unary::Unary;
