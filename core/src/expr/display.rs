use std::fmt::{self, Display, Formatter, Write};

use num_rational::Rational64;
use num_traits::{One, Signed};

use super::Expr;

/// Largest magnitude written as a default-kind integer literal. Anything bigger is
/// written as a double precision literal so the consumer's compiler cannot overflow.
const MAX_INTEGER_LITERAL: i64 = i32::MAX as i64;

/// A rational number rendered as a literal of the target dialect:
/// integers as `12`, dyadic fractions as exact decimals (`0.375d0`) and any other
/// fraction as a quotient of double precision literals (`(1.0d0/6.0d0)`).
pub struct NumberLiteral(pub Rational64);

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let numer = *value.numer();
        let denom = *value.denom();

        if denom.is_one() {
            return if numer.abs() <= MAX_INTEGER_LITERAL {
                write!(f, "{numer}")
            } else {
                write!(f, "{numer}.0d0")
            };
        }

        if (denom as u64).is_power_of_two() {
            let places = denom.trailing_zeros();
            let digits = numer.unsigned_abs() as u128 * 5u128.pow(places);
            let scale = 10u128.pow(places);
            let sign = if value.is_negative() { "-" } else { "" };

            return write!(
                f,
                "{sign}{}.{:0width$}d0",
                digits / scale,
                digits % scale,
                width = places as usize
            );
        }

        write!(f, "({numer}.0d0/{denom}.0d0)")
    }
}

/// An exponent following `**`: bare when it is a non-negative integer.
struct Exponent(Rational64);

impl Display for Exponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let exponent = self.0;
        if exponent.is_integer() && !exponent.is_negative() {
            write!(f, "{}", exponent.numer())
        } else {
            write!(f, "({})", NumberLiteral(exponent))
        }
    }
}

/// Wraps an operand in parentheses when writing it bare would change the meaning
/// of the surrounding product or negation.
struct Operand<'a> {
    expr: &'a Expr,
    leading: bool,
}

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let needs_parentheses = match self.expr {
            Expr::Sum(terms) => terms.len() > 1,
            Expr::Negate(_) => true,
            Expr::Number(value) => value.is_negative() && !self.leading,
            _ => false,
        };

        if needs_parentheses {
            write!(f, "({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", NumberLiteral(*value)),
            Expr::Symbol(symbol) => write!(f, "{symbol}"),
            Expr::Power(symbol, exponent) => write!(f, "{symbol}**{}", Exponent(*exponent)),
            Expr::Sum(terms) if terms.is_empty() => f.write_char('0'),
            Expr::Sum(terms) => {
                for (position, term) in terms.iter().enumerate() {
                    match (position, term) {
                        (0, Expr::Negate(inner)) => write!(f, "-{}", negated(inner))?,
                        (0, term) => write!(f, "{term}")?,
                        (_, Expr::Negate(inner)) => write!(f, " - {}", negated(inner))?,
                        (_, term) => write!(f, " + {term}")?,
                    }
                }
                Ok(())
            }
            Expr::Product(factors) if factors.is_empty() => f.write_char('1'),
            Expr::Product(factors) => {
                for (position, factor) in factors.iter().enumerate() {
                    if position > 0 {
                        f.write_char('*')?;
                    }
                    write!(
                        f,
                        "{}",
                        Operand {
                            expr: factor,
                            leading: position == 0,
                        }
                    )?;
                }
                Ok(())
            }
            Expr::Negate(inner) => write!(f, "-{}", negated(inner)),
            Expr::Call(function, argument) => write!(f, "{function}({argument})"),
        }
    }
}

fn negated(expr: &Expr) -> Operand<'_> {
    Operand {
        expr,
        leading: false,
    }
}

#[cfg(test)]
mod tests {
    use crate::basis::Axis;
    use crate::expr::{Center, Function, Symbol};

    use super::*;

    #[test]
    fn number_literals() {
        let render = |numer, denom| NumberLiteral(Rational64::new(numer, denom)).to_string();

        assert_eq!(render(12, 1), "12");
        assert_eq!(render(-3, 1), "-3");
        assert_eq!(render(3, 4), "0.75d0");
        assert_eq!(render(105, 16), "6.5625d0");
        assert_eq!(render(-1, 2), "-0.5d0");
        assert_eq!(render(1, 6), "(1.0d0/6.0d0)");
        assert_eq!(render(670_442_572_800, 1), "670442572800.0d0");
    }

    #[test]
    fn signs_inside_sums() {
        let pax = Symbol::Displacement(Center::A, Axis::X);
        let expr = Expr::sum([
            Expr::symbol(pax),
            Expr::product([Expr::int(-2), Expr::power(pax, 2)]),
            Expr::negate(Expr::product([Expr::int(3), Expr::symbol(Symbol::Boys(1))])),
        ]);

        assert_eq!(expr.to_string(), "PAx + -2*PAx**2 - 3*F1");
    }

    #[test]
    fn sums_are_parenthesised_inside_products() {
        let expr = Expr::product([
            Expr::symbol(Symbol::Prefactor),
            Expr::sum([
                Expr::zero(),
                Expr::negate(Expr::product([
                    Expr::int(2),
                    Expr::symbol(Symbol::Exponent),
                    Expr::sum([Expr::one(), Expr::power(Symbol::TotalExponent, -1)]),
                ])),
            ]),
        ]);

        assert_eq!(expr.to_string(), "prefactor*(0 - 2*a2*(1 + gam**(-1)))");
    }

    #[test]
    fn calls_and_fractional_powers() {
        let expr = Expr::product([
            Expr::call(Function::Sqrt, Expr::symbol(Symbol::Pi)),
            Expr::power_ratio(Symbol::BoysArgument, Rational64::new(-3, 2)),
            Expr::call(
                Function::Exp,
                Expr::negate(Expr::symbol(Symbol::BoysArgument)),
            ),
        ]);

        assert_eq!(expr.to_string(), "sqrt(pi)*T**(-1.5d0)*exp(-T)");
    }
}
