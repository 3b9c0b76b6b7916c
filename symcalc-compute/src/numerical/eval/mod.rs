mod binary;
mod unary;

use crate::{
    error::Error,
    symbolic::{derivative::derivative, expr::Expr, simplify::simplify},
};
use log::{debug, trace};
use super::value::Value;

pub use binary::apply;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluates the expression, reducing it to a number if every leaf is a literal, or to a
    /// symbolic remainder otherwise.
    fn eval(&self) -> Result<Value, Error>;
}

impl Eval for Expr {
    fn eval(&self) -> Result<Value, Error> {
        match self {
            Self::Literal(n) => Ok(Value::Number(*n)),
            Self::Variable(name) => {
                trace!("`{}` is a free variable", name);
                Ok(Value::Symbolic(self.clone()))
            },
            Self::Unary(op, operand) => unary::eval_unary(*op, operand),
            Self::Binary(op, lhs, rhs) => binary::eval_binary(*op, lhs, rhs),
            Self::Diff(body, var) => {
                debug!("differentiating `{}` with respect to `{}`", body, var);
                let derivative = simplify(&derivative(body, var)?)?;

                // the derivative is reported as a formula even if it is a constant
                Ok(Value::Symbolic(derivative))
            },
        }
    }
}

/// Evaluates the given expression.
///
/// ```
/// use symcalc_compute::{numerical::{eval, Value}, symbolic::expr::Expr};
///
/// let expr = Expr::add(Expr::lit(1.0), Expr::lit(2.0));
/// assert_eq!(eval(&expr).unwrap(), Value::Number(3.0));
/// ```
pub fn eval(expr: &Expr) -> Result<Value, Error> {
    expr.eval()
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use quickcheck::{QuickCheck, TestResult};
    use super::*;

    use crate::symbolic::expr::{arbitrary::{contains_variable, SmallExpr}, BinOpKind};
    use symcalc_parser::parser::{ast::Expr as AstExpr, Parser};

    /// Parses, lowers and evaluates the given source.
    fn eval_source(source: &str) -> Result<Value, Error> {
        let ast = Parser::new(source).unwrap().try_parse_full::<AstExpr>().unwrap();
        eval(&ast.into())
    }

    /// Evaluates the given source, expecting a number.
    fn eval_number(source: &str) -> f64 {
        match eval_source(source).unwrap() {
            Value::Number(n) => n,
            Value::Symbolic(expr) => panic!("expected a number, got `{}`", expr),
        }
    }

    /// Evaluates the given source, expecting a symbolic remainder.
    fn eval_symbolic(source: &str) -> Expr {
        match eval_source(source).unwrap() {
            Value::Symbolic(expr) => expr,
            Value::Number(n) => panic!("expected a formula, got `{}`", n),
        }
    }

    #[test]
    fn literal() {
        assert_eq!(eval(&Expr::lit(4.5)).unwrap(), Value::Number(4.5));
    }

    #[test]
    fn binary_on_literals() {
        let cases = [
            (BinOpKind::Add, 7.0, 2.0, 9.0),
            (BinOpKind::Sub, 7.0, 2.0, 5.0),
            (BinOpKind::Mul, 7.0, 2.0, 14.0),
            (BinOpKind::Div, 7.0, 2.0, 3.5),
            (BinOpKind::Exp, 7.0, 2.0, 49.0),
            (BinOpKind::Div, -1.0, 4.0, -0.25),
            (BinOpKind::Exp, 2.0, -1.0, 0.5),
        ];

        for (op, a, b, expected) in cases {
            let expr = Expr::binary(op, Expr::lit(a), Expr::lit(b));
            assert_eq!(eval(&expr).unwrap(), Value::Number(expected), "{}", expr);
        }
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::div(Expr::lit(1.0), Expr::lit(0.0));
        assert_eq!(eval(&expr), Err(Error::DivisionByZero));

        let expr = Expr::div(Expr::lit(1.0), Expr::lit(-0.0));
        assert_eq!(eval(&expr), Err(Error::DivisionByZero));

        assert_eq!(eval_source("5 / (2 - 2)"), Err(Error::DivisionByZero));
    }

    #[test]
    fn division_by_zero_next_to_variable() {
        assert_eq!(eval_source("x + 1 / 0"), Err(Error::DivisionByZero));
    }

    #[test]
    fn out_of_domain_power_is_nan() {
        assert!(eval_number("(-8)^(1/3)").is_nan());
    }

    #[test]
    fn nested_parens() {
        assert_float_relative_eq!(eval_number("2 * ((6 + 4) / 10)"), 2.0);
        assert_float_relative_eq!(eval_number("((1 + 9) / 5) * 3"), 6.0);
    }

    #[test]
    fn precedence_and_unary() {
        assert_float_relative_eq!(eval_number("1 + 2 * 3"), 7.0);
        assert_float_relative_eq!(eval_number("3 * -5 / 4 + 6"), 2.25);
        assert_float_relative_eq!(eval_number("-2^2"), -4.0);
        assert_float_relative_eq!(eval_number("2^3^2"), 512.0);
        assert_float_relative_eq!(eval_number("+3 - -3"), 6.0);
        assert_float_relative_eq!(eval_number("1.5 * .5"), 0.75);
    }

    #[test]
    fn variable_is_symbolic() {
        assert_eq!(eval(&Expr::var("x")).unwrap(), Value::Symbolic(Expr::var("x")));
    }

    #[test]
    fn symbolic_iff_variable() {
        fn prop_symbolic_iff_variable(expr: SmallExpr) -> TestResult {
            match eval(&expr.0) {
                Ok(value) => TestResult::from_bool(value.is_symbolic() == contains_variable(&expr.0)),
                Err(Error::DivisionByZero) => TestResult::discard(),
                Err(_) => TestResult::failed(),
            }
        }

        QuickCheck::new()
            .tests(500)
            .quickcheck(prop_symbolic_iff_variable as fn(SmallExpr) -> TestResult);
    }

    #[test]
    fn symbolic_remainder_keeps_reduced_sides() {
        assert_eq!(
            eval_symbolic("(2 * 3) + x"),
            Expr::add(Expr::lit(6.0), Expr::var("x")),
        );
        assert_eq!(
            eval_symbolic("y * (1 + 1)"),
            Expr::mul(Expr::var("y"), Expr::lit(2.0)),
        );
        assert_eq!(eval_symbolic("-x"), Expr::neg(Expr::var("x")));
        assert_eq!(eval_symbolic("-(x - (4 / 2))").to_string(), "-(x - 2)");
    }

    #[test]
    fn remainder_is_not_simplified() {
        assert_eq!(eval_symbolic("x * 1 + 0").to_string(), "((x * 1) + 0)");
    }

    #[test]
    fn derivative_of_square() {
        let derivative = eval_symbolic("diff(x^2, x)");
        assert_eq!(derivative, Expr::mul(Expr::lit(2.0), Expr::var("x")));
        assert_eq!(derivative.to_string(), "(2 * x)");
    }

    #[test]
    fn derivative_default_variable() {
        assert_eq!(
            eval_symbolic("diff(x^3)").to_string(),
            "(3 * (x ^ 2))",
        );
    }

    #[test]
    fn constant_derivative_is_symbolic() {
        assert_eq!(eval_source("diff(5)").unwrap(), Value::Symbolic(Expr::lit(0.0)));
        assert_eq!(eval_source("diff(y, x)").unwrap(), Value::Symbolic(Expr::lit(0.0)));
    }

    #[test]
    fn derivative_in_arithmetic() {
        assert_eq!(
            eval_symbolic("diff(x^2) + 1").to_string(),
            "((2 * x) + 1)",
        );
    }

    #[test]
    fn derivative_faults() {
        assert_eq!(
            eval_source("diff(x^y)"),
            Err(Error::NonConstantExponent(Expr::var("y"))),
        );
        assert_eq!(eval_source("diff(diff(x^2))"), Err(Error::NestedDerivative));
    }
}
