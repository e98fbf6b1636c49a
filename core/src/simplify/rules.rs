use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

use crate::expr::{Alias, Expr, Symbol};

use super::RewriteRule;

/// `x**0 -> 1`
pub struct ZeroPower;

impl RewriteRule for ZeroPower {
    fn name(&self) -> &'static str {
        "zero power"
    }

    fn rewrite_node(&self, node: Expr) -> Expr {
        match node {
            Expr::Power(_, exponent) if exponent.is_zero() => Expr::one(),
            other => other,
        }
    }
}

/// `x**1 -> x`
pub struct UnitPower;

impl RewriteRule for UnitPower {
    fn name(&self) -> &'static str {
        "unit power"
    }

    fn rewrite_node(&self, node: Expr) -> Expr {
        match node {
            Expr::Power(symbol, exponent) if exponent.is_one() => Expr::Symbol(symbol),
            other => other,
        }
    }
}

/// Drops factors of 1, flattens nested products and unwraps sums and products
/// holding a single element.
pub struct MultiplicativeIdentity;

impl RewriteRule for MultiplicativeIdentity {
    fn name(&self) -> &'static str {
        "multiplicative identity"
    }

    fn rewrite_node(&self, node: Expr) -> Expr {
        match node {
            Expr::Product(factors) => {
                let mut flat = Vec::with_capacity(factors.len());
                for factor in factors {
                    push_factor(&mut flat, factor);
                }
                collapse(flat, Expr::one(), Expr::Product)
            }
            Expr::Sum(terms) if terms.len() == 1 => collapse(terms, Expr::zero(), Expr::Sum),
            other => other,
        }
    }
}

/// Removes additive zeros and normalises signs:
///
/// * a product with a zero factor is zero,
/// * zero summands are dropped unless they lead the sum,
/// * nested sums are flattened,
/// * negative coefficients become a negation of the whole product, so a sum renders
///   `a - b` instead of `a + -b`.
pub struct AdditiveZero;

impl RewriteRule for AdditiveZero {
    fn name(&self) -> &'static str {
        "additive zero"
    }

    fn rewrite_node(&self, node: Expr) -> Expr {
        match node {
            Expr::Product(factors) => {
                if factors.iter().any(Expr::is_zero) {
                    return Expr::zero();
                }

                let mut negative = false;
                let mut flat = Vec::with_capacity(factors.len());
                for factor in factors {
                    match factor {
                        Expr::Negate(inner) => {
                            negative = !negative;
                            push_factor(&mut flat, *inner);
                        }
                        Expr::Number(value) if value.is_negative() => {
                            negative = !negative;
                            push_factor(&mut flat, Expr::Number(-value));
                        }
                        other => push_factor(&mut flat, other),
                    }
                }

                let product = collapse(flat, Expr::one(), Expr::Product);
                if negative {
                    Expr::negate(product)
                } else {
                    product
                }
            }
            Expr::Sum(terms) => {
                let mut flat = Vec::with_capacity(terms.len());
                for term in terms {
                    match term {
                        Expr::Sum(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }

                let kept = flat
                    .into_iter()
                    .enumerate()
                    .filter(|(position, term)| *position == 0 || !term.is_zero())
                    .map(|(_, term)| match term {
                        Expr::Number(value) if value.is_negative() => {
                            Expr::negate(Expr::Number(-value))
                        }
                        other => other,
                    })
                    .collect::<Vec<_>>();

                collapse(kept, Expr::zero(), Expr::Sum)
            }
            Expr::Negate(inner) => match *inner {
                Expr::Negate(twice) => *twice,
                Expr::Number(value) if value.is_zero() => Expr::zero(),
                Expr::Number(value) if value.is_negative() => Expr::Number(-value),
                other => Expr::negate(other),
            },
            other => other,
        }
    }
}

/// Replaces frequent powers with the short names the consumer declares.
pub struct SymbolAliasing {
    aliases: Vec<(Symbol, Rational64, Alias)>,
}

impl SymbolAliasing {
    pub fn new(aliases: impl IntoIterator<Item = Alias>) -> Self {
        Self {
            aliases: aliases
                .into_iter()
                .map(|alias| {
                    let (symbol, exponent) = alias.definition();
                    (symbol, Rational64::from_integer(exponent), alias)
                })
                .collect(),
        }
    }

    /// No aliases at all.
    pub fn none() -> Self {
        Self::new([])
    }

    /// `e1`, `e2`, `e3` for powers of the scaling parameter.
    pub fn nuclear_attraction() -> Self {
        Self::new((1..=3).map(Alias::ScalingPower))
    }

    /// `Y1` to `Y4` for inverse powers of the total exponent and `a2sq`.
    pub fn overlap() -> Self {
        Self::new(
            (1..=4)
                .map(Alias::InverseExponentPower)
                .chain([Alias::ExponentSquared]),
        )
    }

    fn lookup(&self, symbol: Symbol, exponent: Rational64) -> Option<Alias> {
        self.aliases
            .iter()
            .find(|&&(aliased, power, _)| aliased == symbol && power == exponent)
            .map(|&(_, _, alias)| alias)
    }
}

impl RewriteRule for SymbolAliasing {
    fn name(&self) -> &'static str {
        "symbol aliasing"
    }

    fn rewrite_node(&self, node: Expr) -> Expr {
        let replacement = match &node {
            Expr::Symbol(symbol) => self.lookup(*symbol, Rational64::one()),
            // a unit power is only aliased once `UnitPower` has reduced it to the symbol
            Expr::Power(symbol, exponent) if !exponent.is_one() => {
                self.lookup(*symbol, *exponent)
            }
            _ => None,
        };

        match replacement {
            Some(alias) => Expr::Symbol(Symbol::Alias(alias)),
            None => node,
        }
    }
}

/// Appends a factor to a flattened product, dropping ones and splicing in the
/// factors of nested products.
fn push_factor(flat: &mut Vec<Expr>, factor: Expr) {
    match factor {
        Expr::Product(inner) => {
            for factor in inner {
                push_factor(flat, factor);
            }
        }
        factor if factor.is_one() => {}
        factor => flat.push(factor),
    }
}

/// Turns a list of operands back into a node: `empty` when there are none, the
/// operand itself when there is exactly one.
fn collapse(mut items: Vec<Expr>, empty: Expr, node: fn(Vec<Expr>) -> Expr) -> Expr {
    match items.len() {
        0 => empty,
        1 => items.swap_remove(0),
        _ => node(items),
    }
}

#[cfg(test)]
mod tests {
    use crate::basis::Axis;
    use crate::expr::Center;

    use super::*;

    fn pax() -> Symbol {
        Symbol::Displacement(Center::A, Axis::X)
    }

    #[test]
    fn power_rules() {
        assert_eq!(ZeroPower.apply(Expr::power(pax(), 0)), Expr::one());
        assert_eq!(ZeroPower.apply(Expr::power(pax(), 1)), Expr::power(pax(), 1));
        assert_eq!(UnitPower.apply(Expr::power(pax(), 1)), Expr::symbol(pax()));
        assert_eq!(UnitPower.apply(Expr::power(pax(), -1)), Expr::power(pax(), -1));
    }

    #[test]
    fn identity_collapses_chains_of_ones() {
        let expr = Expr::product([
            Expr::one(),
            Expr::one(),
            Expr::product([Expr::one(), Expr::symbol(Symbol::Boys(0))]),
            Expr::sum([Expr::one()]),
            Expr::one(),
        ]);

        assert_eq!(
            MultiplicativeIdentity.apply(expr),
            Expr::symbol(Symbol::Boys(0))
        );
    }

    #[test]
    fn identity_keeps_non_trivial_products_flat() {
        let expr = Expr::product([
            Expr::symbol(Symbol::Prefactor),
            Expr::product([Expr::int(2), Expr::symbol(Symbol::Exponent)]),
            Expr::sum([Expr::symbol(pax())]),
        ]);

        assert_eq!(
            MultiplicativeIdentity.apply(expr),
            Expr::product([
                Expr::symbol(Symbol::Prefactor),
                Expr::int(2),
                Expr::symbol(Symbol::Exponent),
                Expr::symbol(pax()),
            ])
        );
    }

    #[test]
    fn zeros_are_removed_except_in_leading_position() {
        let expr = Expr::sum([
            Expr::zero(),
            Expr::product([Expr::int(-2), Expr::symbol(Symbol::Exponent)]),
            Expr::zero(),
            Expr::product([Expr::int(5), Expr::zero()]),
        ]);

        let simplified = AdditiveZero.apply(expr);
        assert_eq!(simplified.to_string(), "0 - 2*a2");
    }

    #[test]
    fn trailing_zeros_leave_a_single_term() {
        let expr = Expr::sum([Expr::symbol(pax()), Expr::zero(), Expr::zero()]);
        assert_eq!(AdditiveZero.apply(expr), Expr::symbol(pax()));
    }

    #[test]
    fn negations_are_pulled_out_of_products() {
        let expr = Expr::product([
            Expr::int(-1),
            Expr::negate(Expr::symbol(pax())),
            Expr::negate(Expr::symbol(Symbol::Scaling)),
        ]);

        assert_eq!(
            AdditiveZero.apply(expr),
            Expr::negate(Expr::product([
                Expr::symbol(pax()),
                Expr::symbol(Symbol::Scaling),
            ]))
        );
    }

    #[test]
    fn aliases_only_match_their_exact_power() {
        let nuclear = SymbolAliasing::nuclear_attraction();
        assert_eq!(
            nuclear.apply(Expr::symbol(Symbol::Scaling)).to_string(),
            "e1"
        );
        assert_eq!(
            nuclear.apply(Expr::power(Symbol::Scaling, 3)).to_string(),
            "e3"
        );
        assert_eq!(
            nuclear.apply(Expr::power(Symbol::Scaling, 4)).to_string(),
            "eps**4"
        );
        // the unit power has to be gone before the bare symbol can be aliased
        assert_eq!(
            nuclear.apply(Expr::power(Symbol::Scaling, 1)).to_string(),
            "eps**1"
        );

        let overlap = SymbolAliasing::overlap();
        assert_eq!(
            overlap.apply(Expr::power(Symbol::TotalExponent, -4)).to_string(),
            "Y4"
        );
        assert_eq!(
            overlap.apply(Expr::power(Symbol::TotalExponent, 2)).to_string(),
            "gam**2"
        );
        assert_eq!(
            overlap.apply(Expr::power(Symbol::Exponent, 2)).to_string(),
            "a2sq"
        );
        assert_eq!(
            overlap.apply(Expr::symbol(Symbol::Scaling)).to_string(),
            "eps"
        );
    }
}
