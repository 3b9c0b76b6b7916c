use std::{fmt, ops::Range};
use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    error::{kind, Error},
    token::{CloseParen, Comma, Name, OpenParen},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name that introduces a differentiation, as in `diff(x^2, x)`.
pub const DIFF_KEYWORD: &str = "diff";

/// A request to differentiate an expression, such as `diff(x^2)` or `diff(x*y, y)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diff {
    /// The expression to differentiate.
    pub expr: Box<Expr>,

    /// The variable to differentiate with respect to, if it was given.
    pub var: Option<LitSym>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Diff {
    /// Returns the span of the differentiation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Diff {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        if name.lexeme != DIFF_KEYWORD {
            return Err(Error::new(vec![name.span], kind::NonFatal));
        }

        let open_paren = input.try_parse::<OpenParen>()
            .map_err(|_| Error::new(vec![name.span.clone()], kind::MissingDiffArguments))?;
        if let Ok(close_paren) = input.try_parse::<CloseParen>() {
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                kind::EmptyParenthesis,
            ));
        }

        let expr = input.nest(|input| input.try_parse::<Expr>())?;

        let var = if input.try_parse::<Comma>().is_ok() {
            let var = input.try_parse::<LitSym>()
                .map_err(|err| Error::new(err.spans, kind::ExpectedDiffVariable))?;
            Some(var)
        } else {
            None
        };

        if let Ok(comma) = input.try_parse::<Comma>() {
            let end = input.try_parse::<Expr>().map_or(comma.span.end, |extra| extra.span().end);
            return Err(Error::new(vec![comma.span.start..end], kind::TooManyDiffArguments));
        }

        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true }))?;

        Ok(Self {
            expr: Box::new(expr),
            var,
            span: name.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.var {
            Some(var) => write!(f, "{}({}, {})", DIFF_KEYWORD, self.expr, var),
            None => write!(f, "{}({})", DIFF_KEYWORD, self.expr),
        }
    }
}
