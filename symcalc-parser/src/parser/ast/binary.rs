use std::{fmt, ops::Range};
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::{kind, Error},
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Creates the `lhs op rhs` node, spanning both operands.
    fn join(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        })
    }

    /// Parses the binary operator that follows, only if its precedence is at least `precedence`
    /// and, when `exp_only` is set, only if it is the exponentiation operator. The cursor does
    /// not move if the operator is rejected.
    fn parse_op(input: &mut Parser, precedence: Precedence, exp_only: bool) -> Option<BinOp> {
        input.try_parse_then::<BinOp, _>(|op, input| {
            if op.precedence() >= precedence && (!exp_only || op.kind == BinOpKind::Exp) {
                Ok(())
            } else {
                Err(input.error(kind::NonFatal))
            }
        }).ok()
    }

    /// Parses exponentiation applied to an already parsed base, such as `x^2`. The exponent is
    /// parsed at the unary level, which makes `^` right-associative and allows `x^-1`.
    pub fn parse_exponent(input: &mut Parser, mut base: Expr) -> Result<Expr, Error> {
        while let Some(op) = Self::parse_op(input, Precedence::Exp, true) {
            let exponent = input.nest(Unary::parse_or_lower)?;
            base = Self::join(base, op, exponent);
        }

        Ok(base)
    }

    /// Parses the operators and operands that follow an already parsed left-hand side, using
    /// precedence climbing. Only operators with a precedence of at least `precedence` are
    /// consumed.
    ///
    /// Every operator pushes the operands before it one level deeper, so the height of the result
    /// is checked against the nesting limit as it grows.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        let mut height = lhs.height();
        while let Some(op) = Self::parse_op(input, precedence, false) {
            let mut rhs = Unary::parse_or_lower(input)?;

            // before creating the `lhs op rhs` node, check the precedence of the following
            // operator, if any
            // in `3 + 4 * 5`, `4 * 5` must be parsed first and become the right-hand side
            loop {
                let next_op = input.peek_with_fn(|input| Self::parse_op(input, Precedence::Any, false));
                let Some(next_op) = next_op else {
                    break;
                };

                let binds_tighter = next_op.precedence() > op.precedence()
                    || (next_op.precedence() == op.precedence()
                        && next_op.associativity() == Associativity::Right);
                if binds_tighter {
                    let next_precedence = next_op.precedence();
                    rhs = input.nest(|input| Self::parse_expr(input, rhs, next_precedence))?;
                } else {
                    // lower precedence, or equal precedence and left-associativity, such as
                    // `1 * 2 + 3` or `1 * 2 * 3`
                    // let `lhs` become `1 * 2` and parse this operator on the next iteration of
                    // the outer loop
                    break;
                }
            }

            height = height.max(rhs.height()) + 1;
            input.check_height(height, op.span.clone())?;
            lhs = Self::join(lhs, op, rhs);
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op.kind {
            BinOpKind::Exp => write!(f, "{}^{}", self.lhs, self.rhs),
            kind => write!(f, "{} {} {}", self.lhs, kind, self.rhs),
        }
    }
}
