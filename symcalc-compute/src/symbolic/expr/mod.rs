//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](symcalc_parser::parser::ast::Expr) type from `symcalc_parser` is convenient for
//! parsing, since it remembers where every node came from in the source code, and keeps track of
//! parentheses and unary plus signs. None of that matters once the expression has been parsed.
//!
//! This module defines a separate [`Expr`] with exactly five kinds of nodes: literals, variables,
//! negation, binary operations and derivative requests. It is the type that the evaluator, the
//! differentiator and the simplifier all work with.
//!
//! # Sharing
//!
//! An [`Expr`] is immutable once constructed. Children are stored behind an [`Arc`], so that a
//! transformation producing a new tree can reuse any subtree it did not change instead of copying
//! it. This also makes [`Expr`] [`Send`] and [`Sync`].
//!
//! ```
//! use symcalc_compute::symbolic::expr::Expr;
//! use symcalc_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("+(x) * 2").unwrap();
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr: Expr = ast_expr.into();
//! assert_eq!(expr, Expr::mul(Expr::var("x"), Expr::lit(2.0)));
//! assert_eq!(expr.to_string(), "(x * 2)");
//! ```

use crate::numerical::fmt::fmt_number;
use symcalc_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    token::op::UnaryOpKind,
};
use std::{fmt, sync::Arc};

#[cfg(test)]
pub(crate) mod arbitrary;

pub use symcalc_parser::parser::token::op::BinOpKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variable that `diff(expr)` differentiates with respect to when no variable is given.
pub const DEFAULT_VARIABLE: &str = "x";

/// The unary operation that is being performed.
///
/// Unary plus is dropped while lowering the AST, so negation is the only unary operation left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    /// Negation, `-x`.
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
        }
    }
}

/// A mathematical expression.
///
/// Two expressions are equal if they have exactly the same shape. Literals compare by numeric
/// value, so `Expr::lit(-0.0) == Expr::lit(0.0)`. No algebraic equivalence is checked: `x + 1` and
/// `1 + x` are different expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant.
    Literal(f64),

    /// A free variable, such as `x`.
    Variable(String),

    /// A unary operation applied to an operand.
    Unary(UnaryOp, Arc<Expr>),

    /// A binary operation, such as `x + 1`.
    Binary(BinOpKind, Arc<Expr>, Arc<Expr>),

    /// A request to differentiate the first expression with respect to the named variable.
    ///
    /// The evaluator always replaces this node with the derivative it asks for.
    Diff(Arc<Expr>, String),
}

impl Expr {
    /// Creates a literal.
    pub fn lit(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Creates a variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates the negation `-operand`.
    pub fn neg(operand: impl Into<Arc<Expr>>) -> Self {
        Self::Unary(UnaryOp::Neg, operand.into())
    }

    /// Creates the binary operation `lhs op rhs`.
    pub fn binary(op: BinOpKind, lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::Binary(op, lhs.into(), rhs.into())
    }

    /// Creates `lhs + rhs`.
    pub fn add(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// Creates `lhs * rhs`.
    pub fn mul(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// Creates `lhs / rhs`.
    pub fn div(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// Creates `lhs ^ rhs`.
    pub fn pow(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Self {
        Self::binary(BinOpKind::Exp, lhs, rhs)
    }

    /// Creates a request to differentiate `body` with respect to `var`.
    pub fn diff(body: impl Into<Arc<Expr>>, var: impl Into<String>) -> Self {
        Self::Diff(body.into(), var.into())
    }

    /// Returns the value of the expression if it is a literal.
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Self::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true if any literal in the expression is `NaN`.
    pub fn contains_nan(&self) -> bool {
        match self {
            Self::Literal(value) => value.is_nan(),
            Self::Variable(_) => false,
            Self::Unary(_, operand) => operand.contains_nan(),
            Self::Binary(_, lhs, rhs) => lhs.contains_nan() || rhs.contains_nan(),
            Self::Diff(body, _) => body.contains_nan(),
        }
    }
}

/// A literal is equal to a number if it has the same value. Any other kind of expression is never
/// equal to a number.
impl PartialEq<f64> for Expr {
    fn eq(&self, other: &f64) -> bool {
        self.as_literal().is_some_and(|value| value == *other)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", fmt_number(*value)),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Unary(op, operand) => {
                // `--x` and `--1` would read as a different operator
                let needs_parens = match &**operand {
                    Self::Unary(..) => true,
                    Self::Literal(value) => value.is_sign_negative() && *value != 0.0,
                    _ => false,
                };

                if needs_parens {
                    write!(f, "{}({})", op, operand)
                } else {
                    write!(f, "{}{}", op, operand)
                }
            },
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Self::Diff(body, var) => write!(f, "diff({}, {})", body, var),
        }
    }
}

/// Lowers a parsed expression into an [`Expr`]. Parentheses and unary plus signs disappear, and
/// `diff` without a variable differentiates with respect to [`DEFAULT_VARIABLE`].
impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Literal(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(sym.name),
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Unary(unary) => {
                let operand = Self::from(*unary.operand);
                match unary.op.kind {
                    UnaryOpKind::Neg => Self::neg(operand),
                    UnaryOpKind::Pos => operand,
                }
            },
            AstExpr::Binary(binary) => Self::binary(
                binary.op.kind,
                Self::from(*binary.lhs),
                Self::from(*binary.rhs),
            ),
            AstExpr::Diff(diff) => {
                let var = diff.var.map_or_else(|| DEFAULT_VARIABLE.to_string(), |var| var.name);
                Self::diff(Self::from(*diff.expr), var)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use symcalc_parser::parser::Parser;

    /// Parses and lowers the given source.
    fn lower(source: &str) -> Expr {
        Parser::new(source)
            .unwrap()
            .try_parse_full::<AstExpr>()
            .unwrap()
            .into()
    }

    #[test]
    fn lower_literals() {
        assert_eq!(lower("3.5"), Expr::lit(3.5));
        assert_eq!(lower("y"), Expr::var("y"));
    }

    #[test]
    fn lower_drops_parens_and_unary_plus() {
        assert_eq!(lower("((x))"), Expr::var("x"));
        assert_eq!(lower("+x"), Expr::var("x"));
        assert_eq!(lower("-+x"), Expr::neg(Expr::var("x")));
    }

    #[test]
    fn lower_binary() {
        assert_eq!(
            lower("1 + 2 * x"),
            Expr::add(Expr::lit(1.0), Expr::mul(Expr::lit(2.0), Expr::var("x"))),
        );
        assert_eq!(
            lower("-x^2"),
            Expr::neg(Expr::pow(Expr::var("x"), Expr::lit(2.0))),
        );
    }

    #[test]
    fn lower_diff_default_variable() {
        assert_eq!(
            lower("diff(x^2)"),
            Expr::diff(Expr::pow(Expr::var("x"), Expr::lit(2.0)), "x"),
        );
        assert_eq!(lower("diff(y, y)"), Expr::diff(Expr::var("y"), "y"));
    }

    #[test]
    fn literal_equality_is_numeric() {
        assert_eq!(Expr::lit(2.0), 2.0);
        assert_eq!(Expr::lit(-0.0), Expr::lit(0.0));
        assert_ne!(Expr::var("x"), 0.0);
        assert_ne!(Expr::neg(Expr::lit(0.0)), 0.0);
    }

    #[test]
    fn display_parenthesizes_every_binary_node() {
        let expr = Expr::add(Expr::lit(2.0), Expr::mul(Expr::lit(3.0), Expr::lit(4.0)));
        assert_eq!(expr.to_string(), "(2 + (3 * 4))");
    }

    #[test]
    fn display_unary() {
        assert_eq!(Expr::neg(Expr::var("x")).to_string(), "-x");
        assert_eq!(Expr::neg(Expr::neg(Expr::var("x"))).to_string(), "-(-x)");
        assert_eq!(Expr::neg(Expr::lit(-2.0)).to_string(), "-(-2)");
        assert_eq!(
            Expr::neg(Expr::pow(Expr::var("x"), Expr::lit(2.0))).to_string(),
            "-(x ^ 2)",
        );
    }

    #[test]
    fn display_diff() {
        let expr = Expr::diff(Expr::mul(Expr::var("x"), Expr::var("y")), "y");
        assert_eq!(expr.to_string(), "diff((x * y), y)");
    }

    #[test]
    fn subtrees_are_shared() {
        let x = Arc::new(Expr::var("x"));
        let expr = Expr::add(Arc::clone(&x), Arc::clone(&x));
        let Expr::Binary(_, lhs, rhs) = &expr else { unreachable!() };
        assert!(Arc::ptr_eq(lhs, rhs));
    }
}
