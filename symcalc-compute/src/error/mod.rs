//! Errors that can occur while evaluating, differentiating or simplifying an expression.
//!
//! The algorithms in this crate return the plain [`Error`] enum, which knows nothing about the
//! source code the expression came from. To report one of them to the user, attach the span of
//! the offending input with [`Error::into_reported`], which produces a [`symcalc_error::Error`]
//! carrying one of the kinds in [`kind`].

pub mod kind;

use crate::symbolic::expr::Expr;
use std::{fmt, ops::Range};

/// A fault that aborts evaluation, differentiation or simplification.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A division had a divisor of exactly zero, either during evaluation or while folding
    /// constants.
    DivisionByZero,

    /// Differentiation reached a power whose exponent is neither a literal nor a negated literal.
    /// Contains that exponent.
    NonConstantExponent(Expr),

    /// Differentiation reached a `diff` node.
    NestedDerivative,
}

impl Error {
    /// Attaches the given span of the source code to this error, so that it can be reported.
    pub fn into_reported(self, span: Range<usize>) -> symcalc_error::Error {
        let spans = vec![span];
        match self {
            Self::DivisionByZero => symcalc_error::Error::new(spans, kind::DivisionByZero),
            Self::NonConstantExponent(exponent) => symcalc_error::Error::new(
                spans,
                kind::NonConstantExponent { exponent: exponent.to_string() },
            ),
            Self::NestedDerivative => symcalc_error::Error::new(spans, kind::NestedDerivative),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NonConstantExponent(exponent) => write!(
                f,
                "cannot differentiate a power with the non-constant exponent `{}`",
                exponent,
            ),
            Self::NestedDerivative => write!(f, "cannot differentiate a derivative"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::NonConstantExponent(Expr::var("x")).to_string(),
            "cannot differentiate a power with the non-constant exponent `x`",
        );
    }

    #[test]
    fn reported_kind_and_span() {
        let err = Error::DivisionByZero.into_reported(0..5);
        assert!(err.is::<kind::DivisionByZero>());
        assert_eq!(err.spans, vec![0..5]);

        let err = Error::NonConstantExponent(Expr::var("y")).into_reported(2..3);
        assert!(err.is::<kind::NonConstantExponent>());
        assert!(!err.is::<kind::NestedDerivative>());
    }
}
