use std::fmt;

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2 + 3 = 5`, applied to every operator.
    FoldConstants,

    /// `a + 0 = a`, `0 + a = a`
    AddZero,

    /// `a - 0 = a`
    SubZero,

    /// `a * 1 = a`, `1 * a = a`
    MulOne,

    /// `a * 0 = 0`, `0 * a = 0`
    MulZero,

    /// `a ^ 1 = a`
    PowOne,

    /// `a ^ 0 = 1`, when `a` is not the literal zero
    PowZero,

    /// `0 ^ a = 0`
    ZeroPow,

    /// `-0 = 0`
    NegZero,

    /// `-(-a) = a`
    DoubleNeg,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::FoldConstants => "fold constants",
            Self::AddZero => "a + 0 = a",
            Self::SubZero => "a - 0 = a",
            Self::MulOne => "a * 1 = a",
            Self::MulZero => "a * 0 = 0",
            Self::PowOne => "a ^ 1 = a",
            Self::PowZero => "a ^ 0 = 1",
            Self::ZeroPow => "0 ^ a = 0",
            Self::NegZero => "-0 = 0",
            Self::DoubleNeg => "-(-a) = a",
        };
        write!(f, "{}", description)
    }
}
