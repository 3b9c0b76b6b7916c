use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// The tokenizer found a character that does not begin any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, names, parentheses, commas and the operators {}",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnknownCharacter {
    /// The character that was found.
    pub character: char,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// `diff` was used without an argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected `(` after `diff`",
    labels = ["this name is reserved for differentiation"],
    help = format!("to differentiate an expression, type: {}", "diff(<expression>, <variable>)".fg(EXPR)),
)]
pub struct MissingDiffArguments;

/// The second argument of `diff` was not a variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a variable name after the comma in `diff`",
    labels = ["this should be a variable name, such as `x`"],
    help = "omit the second argument to differentiate with respect to `x`",
)]
pub struct ExpectedDiffVariable;

/// `diff` was given more than two arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many arguments given to `diff`",
    labels = ["remove this argument"],
    help = format!("`diff` takes at most two arguments: {}", "diff(<expression>, <variable>)".fg(EXPR)),
)]
pub struct TooManyDiffArguments;

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this goes past the limit of {} levels", max_depth)],
    help = "split the calculation into smaller steps",
)]
pub struct ExpressionTooDeep {
    /// The deepest nesting that is allowed.
    pub max_depth: usize,
}
