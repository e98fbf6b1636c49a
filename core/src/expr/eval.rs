use nalgebra::Vector3;
use num_rational::Rational64;

use super::{Alias, Center, Expr, Function, Symbol};

/// Numeric values for every symbol an expression can reference. Used to check
/// that rewrites of an expression keep its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Bindings {
    /// `P - A`
    pub pa: Vector3<f64>,
    /// `P - B`
    pub pb: Vector3<f64>,
    /// `P - C`
    pub pc: Vector3<f64>,
    /// `a1 + a2`
    pub total_exponent: f64,
    /// exponent of the second Gaussian
    pub exponent: f64,
    pub scaling: f64,
    pub prefactor: f64,
    pub boys_argument: f64,
    /// `F0` to `F10`
    pub boys: [f64; 11],
}

impl Bindings {
    /// Derives the displacement vectors and exponent symbols from two Gaussian
    /// centers, their exponents and a nucleus position. The prefactor is 1 and all
    /// Boys values are 0 until set explicitly.
    pub fn from_centers(
        a_pos: Vector3<f64>,
        a_exp: f64,
        b_pos: Vector3<f64>,
        b_exp: f64,
        nucleus: Vector3<f64>,
    ) -> Self {
        let p = product_center(a_pos, a_exp, b_pos, b_exp);
        let total_exponent = a_exp + b_exp;
        let pc = p - nucleus;

        Self {
            pa: p - a_pos,
            pb: p - b_pos,
            pc,
            total_exponent,
            exponent: b_exp,
            scaling: (4.0 * total_exponent).recip(),
            prefactor: 1.0,
            boys_argument: total_exponent * pc.norm_squared(),
            boys: [0.0; 11],
        }
    }

    pub fn with_prefactor(self, prefactor: f64) -> Self {
        Self { prefactor, ..self }
    }

    pub fn with_boys(self, boys: [f64; 11]) -> Self {
        Self { boys, ..self }
    }

    pub fn value(&self, symbol: Symbol) -> f64 {
        match symbol {
            Symbol::Displacement(center, axis) => {
                let vector = match center {
                    Center::A => &self.pa,
                    Center::B => &self.pb,
                    Center::C => &self.pc,
                };
                vector[axis.index()]
            }
            Symbol::Scaling => self.scaling,
            Symbol::TotalExponent => self.total_exponent,
            Symbol::Exponent => self.exponent,
            Symbol::Prefactor => self.prefactor,
            Symbol::Boys(order) => self.boys[order as usize],
            Symbol::BoysArgument => self.boys_argument,
            Symbol::Pi => std::f64::consts::PI,
            Symbol::Alias(alias) => {
                let (symbol, exponent) = Alias::definition(alias);
                self.value(symbol).powi(exponent as i32)
            }
        }
    }
}

impl Expr {
    /// Evaluates the expression with the given symbol values.
    pub fn evaluate(&self, bindings: &Bindings) -> f64 {
        match self {
            Expr::Number(value) => to_f64(*value),
            Expr::Symbol(symbol) => bindings.value(*symbol),
            Expr::Power(symbol, exponent) => {
                let base = bindings.value(*symbol);
                if exponent.is_integer() {
                    base.powi(exponent.to_integer() as i32)
                } else {
                    base.powf(to_f64(*exponent))
                }
            }
            Expr::Sum(terms) => terms.iter().map(|term| term.evaluate(bindings)).sum(),
            Expr::Product(factors) => factors
                .iter()
                .map(|factor| factor.evaluate(bindings))
                .product(),
            Expr::Negate(inner) => -inner.evaluate(bindings),
            Expr::Call(function, argument) => {
                let argument = argument.evaluate(bindings);
                match function {
                    Function::Exp => argument.exp(),
                    Function::Erf => libm::erf(argument),
                    Function::Sqrt => argument.sqrt(),
                }
            }
        }
    }
}

fn to_f64(value: Rational64) -> f64 {
    *value.numer() as f64 / *value.denom() as f64
}

#[inline(always)]
fn product_center(
    a_pos: Vector3<f64>,
    a_exp: f64,
    b_pos: Vector3<f64>,
    b_exp: f64,
) -> Vector3<f64> {
    (a_exp * a_pos + b_exp * b_pos) / (a_exp + b_exp)
}

#[cfg(test)]
pub(crate) mod testing {
    use nalgebra::Vector3;
    use rand::Rng;

    use super::Bindings;
    use crate::expr::{Alias, Expr, Symbol};

    /// The `n` of every `gam**(-n)` the tree references, aliased as `Yn` or not.
    pub(crate) fn inverse_exponent_powers(expr: &Expr) -> Vec<i64> {
        let mut powers = Vec::new();
        expr.visit(&mut |node| match node {
            Expr::Power(Symbol::TotalExponent, exponent) if exponent.to_integer() < 0 => {
                powers.push(-exponent.to_integer())
            }
            Expr::Symbol(Symbol::Alias(Alias::InverseExponentPower(n))) => powers.push(*n as i64),
            _ => {}
        });
        powers.sort_unstable();
        powers.dedup();
        powers
    }

    /// Random but well conditioned symbol values.
    pub(crate) fn random_bindings(rng: &mut impl Rng) -> Bindings {
        let mut position = || {
            Vector3::new(
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
            )
        };
        let (a, b, c) = (position(), position(), position());

        let a_exp = rng.gen_range(0.2..3.0);
        let b_exp = rng.gen_range(0.2..3.0);
        let prefactor = rng.gen_range(0.5..2.0);
        let boys =
            std::array::from_fn(|order| rng.gen_range(0.5..1.0) / (2 * order + 1) as f64);

        Bindings::from_centers(a, a_exp, b, b_exp, c)
            .with_prefactor(prefactor)
            .with_boys(boys)
    }
}
