use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::{ErrorKind, EXPR};

/// A division had a divisor of exactly zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression divides by zero"],
    help = "the divisor must not evaluate to zero",
)]
pub struct DivisionByZero;

/// Differentiation reached a power whose exponent is not a constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot differentiate a power with a non-constant exponent",
    labels = ["this expression"],
    help = format!(
        "only constant exponents are supported, but the exponent here is `{}`",
        exponent.fg(EXPR),
    ),
)]
pub struct NonConstantExponent {
    /// The exponent that was found, as it would be displayed.
    pub exponent: String,
}

/// Differentiation reached another `diff`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot differentiate a derivative",
    labels = ["this expression"],
    help = format!("evaluate the inner {} on its own first", "diff".fg(EXPR)),
)]
pub struct NestedDerivative;
