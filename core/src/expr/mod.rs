//! Sum-of-products expression trees.
//!
//! The expansion engines build trees, the simplifier rewrites them and the text
//! of an expression is produced only when it is emitted (see [`display`]).

mod display;
mod eval;
mod symbol;

use num_rational::Rational64;
use num_traits::{One, Zero};

pub use display::NumberLiteral;
pub use eval::Bindings;
#[cfg(test)]
pub(crate) use eval::testing;
pub use symbol::{Alias, Center, Function, Symbol};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(Rational64),
    Symbol(Symbol),
    /// A symbol raised to a rational power.
    Power(Symbol, Rational64),
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Negate(Box<Expr>),
    Call(Function, Box<Expr>),
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Number(Rational64::from_integer(value))
    }

    pub fn rational(numer: i64, denom: i64) -> Self {
        Expr::Number(Rational64::new(numer, denom))
    }

    pub fn zero() -> Self {
        Expr::int(0)
    }

    pub fn one() -> Self {
        Expr::int(1)
    }

    pub fn symbol(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }

    /// `symbol**exponent`. Exponents 0 and 1 are kept as written; removing them is
    /// the simplifier's job.
    pub fn power(symbol: Symbol, exponent: i64) -> Self {
        Expr::Power(symbol, Rational64::from_integer(exponent))
    }

    pub fn power_ratio(symbol: Symbol, exponent: Rational64) -> Self {
        Expr::Power(symbol, exponent)
    }

    pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Sum(terms.into_iter().collect())
    }

    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Product(factors.into_iter().collect())
    }

    pub fn negate(inner: Expr) -> Self {
        Expr::Negate(Box::new(inner))
    }

    pub fn call(function: Function, argument: Expr) -> Self {
        Expr::Call(function, Box::new(argument))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Number(value) => value.is_zero(),
            Expr::Negate(inner) => inner.is_zero(),
            _ => false,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(value) if value.is_one())
    }

    /// Rebuilds the tree from the leaves up, handing every rebuilt node to `rewrite`.
    pub fn rewrite_bottom_up<F>(self, rewrite: &mut F) -> Expr
    where
        F: FnMut(Expr) -> Expr,
    {
        let rebuilt = match self {
            Expr::Sum(terms) => Expr::Sum(
                terms
                    .into_iter()
                    .map(|term| term.rewrite_bottom_up(rewrite))
                    .collect(),
            ),
            Expr::Product(factors) => Expr::Product(
                factors
                    .into_iter()
                    .map(|factor| factor.rewrite_bottom_up(rewrite))
                    .collect(),
            ),
            Expr::Negate(inner) => Expr::Negate(Box::new(inner.rewrite_bottom_up(rewrite))),
            Expr::Call(function, argument) => {
                Expr::Call(function, Box::new(argument.rewrite_bottom_up(rewrite)))
            }
            leaf => leaf,
        };

        rewrite(rebuilt)
    }

    /// Number of summands once every product of sums is multiplied out. Function
    /// calls count as a single factor; explicit zeros count as terms.
    pub fn term_count(&self) -> usize {
        match self {
            Expr::Sum(terms) => terms.iter().map(Expr::term_count).sum(),
            Expr::Product(factors) => factors
                .iter()
                .map(Expr::term_count)
                .fold(1, usize::saturating_mul),
            Expr::Negate(inner) => inner.term_count(),
            Expr::Number(_) | Expr::Symbol(_) | Expr::Power(..) | Expr::Call(..) => 1,
        }
    }

    /// Visits every node, parents before children.
    pub fn visit(&self, visitor: &mut impl FnMut(&Expr)) {
        visitor(self);
        match self {
            Expr::Sum(children) | Expr::Product(children) => {
                for child in children {
                    child.visit(visitor);
                }
            }
            Expr::Negate(inner) | Expr::Call(_, inner) => inner.visit(visitor),
            Expr::Number(_) | Expr::Symbol(_) | Expr::Power(..) => {}
        }
    }

    /// All symbols referenced by the tree, whether bare or raised to a power.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        self.visit(&mut |node| match node {
            Expr::Symbol(symbol) | Expr::Power(symbol, _) => {
                if !symbols.contains(symbol) {
                    symbols.push(*symbol)
                }
            }
            _ => {}
        });
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection_sees_through_negation() {
        assert!(Expr::zero().is_zero());
        assert!(Expr::negate(Expr::zero()).is_zero());
        assert!(!Expr::one().is_zero());
        assert!(!Expr::symbol(Symbol::Pi).is_zero());
    }

    #[test]
    fn term_count_multiplies_out_products() {
        let binomial = Expr::Sum(vec![Expr::symbol(Symbol::Exponent), Expr::one()]);
        let expr = Expr::Product(vec![
            Expr::symbol(Symbol::Prefactor),
            Expr::Sum(vec![
                Expr::zero(),
                Expr::Product(vec![binomial.clone(), binomial.clone()]),
                Expr::negate(binomial),
            ]),
        ]);

        assert_eq!(expr.term_count(), 1 + 4 + 2);
        assert_eq!(Expr::symbol(Symbol::Pi).term_count(), 1);
    }

    #[test]
    fn bottom_up_rewrite_reaches_every_leaf() {
        let expr = Expr::sum([
            Expr::product([Expr::int(2), Expr::power(Symbol::Exponent, 0)]),
            Expr::negate(Expr::power(Symbol::Scaling, 0)),
            Expr::call(Function::Sqrt, Expr::power(Symbol::BoysArgument, 0)),
        ]);

        let mut visited = 0;
        let rewritten = expr.rewrite_bottom_up(&mut |node| match node {
            Expr::Power(_, exponent) if exponent.is_zero() => {
                visited += 1;
                Expr::one()
            }
            other => other,
        });

        assert_eq!(visited, 3);
        assert_eq!(
            rewritten,
            Expr::sum([
                Expr::product([Expr::int(2), Expr::one()]),
                Expr::negate(Expr::one()),
                Expr::call(Function::Sqrt, Expr::one()),
            ])
        );
    }

    #[test]
    fn symbols_are_collected_once() {
        let expr = Expr::product([
            Expr::symbol(Symbol::Prefactor),
            Expr::sum([
                Expr::power(Symbol::Scaling, 2),
                Expr::symbol(Symbol::Scaling),
                Expr::symbol(Symbol::Boys(3)),
            ]),
        ]);

        assert_eq!(
            expr.symbols(),
            vec![Symbol::Prefactor, Symbol::Scaling, Symbol::Boys(3)]
        );
    }
}
