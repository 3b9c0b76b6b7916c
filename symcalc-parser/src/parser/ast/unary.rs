use std::{fmt, ops::Range};
use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    error::Error,
    token::op::UnaryOp,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    ///
    /// Prefix operators are right-associative and apply to everything of higher precedence that
    /// follows them, so `-x^2` parses as `-(x^2)`. Without a prefix operator, this parses a
    /// primary expression along with any exponentiation applied to it.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if let Ok(op) = input.try_parse::<UnaryOp>() {
            let operand = input.nest(Self::parse_or_lower)?;
            let span = op.span.start..operand.span().end;
            return Ok(Expr::Unary(Self {
                operand: Box::new(operand),
                op,
                span,
            }));
        }

        let primary: Expr = input.try_parse::<Primary>()?.into();
        Binary::parse_exponent(input, primary)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand = input.nest(Self::parse_or_lower)?;
        let span = op.span.start..operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.kind, self.operand)
    }
}
