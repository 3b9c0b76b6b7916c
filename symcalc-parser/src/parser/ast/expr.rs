use std::{fmt, ops::Range};
use crate::{
    parser::{
        ast::{binary::Binary, diff::{Diff, DIFF_KEYWORD}, literal::Literal, paren::Paren, unary::Unary},
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general expression.
///
/// An expression is any valid piece of code that can be evaluated to produce a value, or a
/// formula if it contains variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A differentiation, such as `diff(x^2, x)`.
    Diff(Diff),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Diff(diff) => diff.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns the number of nodes on the longest path from this expression down to a literal.
    pub fn height(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Paren(paren) => paren.expr.height() + 1,
            Expr::Diff(diff) => diff.expr.height() + 1,
            Expr::Unary(unary) => unary.operand.height() + 1,
            Expr::Binary(binary) => binary.lhs.height().max(binary.rhs.height()) + 1,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse_with_fn(Unary::parse_or_lower)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Diff(diff) => diff.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A differentiation, such as `diff(x^2, x)`.
    Diff(Diff),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Diff(diff) => diff.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(token) = input.current_token() else {
            return Err(input.error(kind::UnexpectedEof));
        };

        match (token.kind, token.lexeme == DIFF_KEYWORD) {
            (TokenKind::Name, true) => input.try_parse::<Diff>().map(Self::Diff),
            (TokenKind::Int | TokenKind::Float | TokenKind::Name, _) => {
                input.try_parse::<Literal>().map(Self::Literal)
            },
            (TokenKind::OpenParen, _) => input.try_parse::<Paren>().map(Self::Paren),
            (TokenKind::CloseParen, _) => Err(input.error(kind::UnclosedParenthesis { opening: false })),
            (found, _) => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Diff(diff) => Self::Diff(diff),
        }
    }
}
