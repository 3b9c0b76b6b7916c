//! Random expressions for property tests.

use quickcheck::{Arbitrary, Gen};
use super::{BinOpKind, Expr};

/// A small expression over the variables `x` and `y`, with literals that are often `0` or `1`
/// so that the identities get exercised.
#[derive(Debug, Clone)]
pub struct SmallExpr(pub Expr);

fn gen_expr(g: &mut Gen, depth: usize) -> Expr {
    let choice = u8::arbitrary(g) % if depth == 0 { 3 } else { 9 };
    match choice {
        0 => Expr::lit(f64::from(u8::arbitrary(g) % 4)),
        1 => Expr::var("x"),
        2 => Expr::var("y"),
        3 => Expr::neg(gen_expr(g, depth - 1)),
        _ => {
            let ops = [BinOpKind::Add, BinOpKind::Sub, BinOpKind::Mul, BinOpKind::Div, BinOpKind::Exp];
            let op = ops[usize::arbitrary(g) % ops.len()];
            Expr::binary(op, gen_expr(g, depth - 1), gen_expr(g, depth - 1))
        },
    }
}

impl Arbitrary for SmallExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(5);
        SmallExpr(gen_expr(g, depth))
    }
}

/// Returns true if a variable appears anywhere in the expression.
pub fn contains_variable(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(_) => false,
        Expr::Variable(_) | Expr::Diff(..) => true,
        Expr::Unary(_, operand) => contains_variable(operand),
        Expr::Binary(_, lhs, rhs) => contains_variable(lhs) || contains_variable(rhs),
    }
}
