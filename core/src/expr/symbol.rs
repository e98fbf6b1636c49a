use std::fmt;

use crate::basis::Axis;

/// The centers whose distance to the Gaussian product center `P` appears in the
/// expansions: the two orbital centers `A`, `B` and the nucleus `C`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Center {
    A,
    B,
    C,
}

/// A symbol of a generated expression. The consumer supplies every value at
/// runtime; the generator only ever manipulates the names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Component of `P - center` along an axis, e.g. `PAx`.
    Displacement(Center, Axis),
    /// Nuclear-attraction scaling parameter `eps = 1/(4*gam)`.
    Scaling,
    /// Sum of both Gaussian exponents, `gam = a1 + a2`.
    TotalExponent,
    /// Exponent of the second Gaussian.
    Exponent,
    /// Family specific factor multiplying the whole expansion.
    Prefactor,
    /// Boys function value of the given order, `F<n>`.
    Boys(u32),
    /// Argument `T` of the Boys function.
    BoysArgument,
    Pi,
    Alias(Alias),
}

/// Short names for the powers that occur over and over in the expansions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alias {
    /// `e<n> = eps**n`
    ScalingPower(u32),
    /// `Y<n> = gam**(-n)`
    InverseExponentPower(u32),
    /// `a2sq = a2**2`
    ExponentSquared,
}

impl Alias {
    /// The symbol and exponent this alias stands for.
    pub fn definition(self) -> (Symbol, i64) {
        match self {
            Alias::ScalingPower(n) => (Symbol::Scaling, n as i64),
            Alias::InverseExponentPower(n) => (Symbol::TotalExponent, -(n as i64)),
            Alias::ExponentSquared => (Symbol::Exponent, 2),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Displacement(center, axis) => {
                let center = match center {
                    Center::A => 'A',
                    Center::B => 'B',
                    Center::C => 'C',
                };
                write!(f, "P{center}{}", axis.label())
            }
            Symbol::Scaling => f.write_str("eps"),
            Symbol::TotalExponent => f.write_str("gam"),
            Symbol::Exponent => f.write_str("a2"),
            Symbol::Prefactor => f.write_str("prefactor"),
            Symbol::Boys(order) => write!(f, "F{order}"),
            Symbol::BoysArgument => f.write_str("T"),
            Symbol::Pi => f.write_str("pi"),
            Symbol::Alias(Alias::ScalingPower(n)) => write!(f, "e{n}"),
            Symbol::Alias(Alias::InverseExponentPower(n)) => write!(f, "Y{n}"),
            Symbol::Alias(Alias::ExponentSquared) => f.write_str("a2sq"),
        }
    }
}

/// Intrinsic functions of the target dialect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Exp,
    Erf,
    Sqrt,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Function::Exp => "exp",
            Function::Erf => "erf",
            Function::Sqrt => "sqrt",
        })
    }
}
