use crate::symbolic::expr::Expr;
use std::fmt::{Display, Formatter};
use super::fmt::fmt_number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// The expression reduced to a single number.
    Number(f64),

    /// The expression contains a free variable, so it could only be partially reduced. Contains
    /// the symbolic remainder.
    Symbolic(Expr),
}

impl Value {
    /// Returns the number if the value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Symbolic(_) => None,
        }
    }

    /// Returns true if the value is symbolic.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic(_))
    }

    /// Converts the value back into an expression. Numbers become literals.
    pub fn into_expr(self) -> Expr {
        match self {
            Self::Number(n) => Expr::Literal(n),
            Self::Symbolic(expr) => expr,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        Self::Symbolic(expr)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", fmt_number(*n)),
            Self::Symbolic(expr) => write!(f, "{}", expr),
        }
    }
}
