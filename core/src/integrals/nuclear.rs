//! Nuclear attraction expansion for a single nucleus `C`.
//!
//! Every axis contributes the index tuples `(l, r, i, u)` of the classic
//! Taketa-Huzinaga-O-ohata expansion. The terms of the full integral are the
//! cross product of the x, y and z tuples; the Boys order of a term is
//! `sum(l - 2r - i)` over the three axes.
use crate::{
    basis::{Axis, Triad},
    combinatorics::{binomial, factorial},
    expr::{Center, Expr, Symbol},
};

/// One `(l, r, i, u)` tuple of a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AxisTerm {
    l: i32,
    r: i32,
    i: i32,
    u: i32,
    /// `binom(l1, u) binom(l2, l - u) l! / (r! i! (l - 2r - 2i)!)`, zero when
    /// one of the binomials vanishes.
    coefficient: i64,
}

impl AxisTerm {
    /// The exponent of `eps` contributed by this axis.
    fn scaling_power(&self) -> i32 {
        self.r + self.i
    }

    /// This axis' share of the Boys order.
    fn boys_order(&self) -> i32 {
        self.l - 2 * self.r - self.i
    }

    fn factors(&self, l1: i32, l2: i32, axis: Axis) -> [Expr; 3] {
        [
            Expr::power(Symbol::Displacement(Center::A, axis), (l1 - self.u) as i64),
            Expr::power(
                Symbol::Displacement(Center::B, axis),
                (l2 - self.l + self.u) as i64,
            ),
            Expr::power(
                Symbol::Displacement(Center::C, axis),
                (self.l - 2 * self.r - 2 * self.i) as i64,
            ),
        ]
    }
}

/// All tuples of one axis, nested `l`, `r`, `i`, `u` from the outside in.
fn axis_terms(l1: i32, l2: i32) -> Vec<AxisTerm> {
    let mut terms = Vec::new();
    for l in 0..=l1 + l2 {
        for r in 0..=l / 2 {
            for i in 0..=(l - 2 * r) / 2 {
                for u in 0..=l {
                    let binomials = binomial(l1, u) * binomial(l2, l - u);
                    let coefficient = if binomials == 0 {
                        0
                    } else {
                        binomials * factorial(l)
                            / (factorial(r) * factorial(i) * factorial(l - 2 * r - 2 * i))
                    };
                    terms.push(AxisTerm {
                        l,
                        r,
                        i,
                        u,
                        coefficient,
                    });
                }
            }
        }
    }
    terms
}

pub fn primitive_nuclear(triad_a: Triad, triad_b: Triad) -> Expr {
    let degrees = Axis::ALL.map(|axis| (triad_a.degree(axis), triad_b.degree(axis)));
    let [x_terms, y_terms, z_terms] = degrees.map(|(l1, l2)| axis_terms(l1, l2));

    let terms = itertools::iproduct!(&x_terms, &y_terms, &z_terms)
        .map(|(x, y, z)| {
            let tuples = [x, y, z];
            if tuples.iter().any(|term| term.coefficient == 0) {
                return Expr::zero();
            }

            let parity = tuples.iter().map(|term| term.l + term.i).sum::<i32>();
            let sign = if parity % 2 == 0 { 1 } else { -1 };
            let coefficient = sign * tuples.iter().map(|term| term.coefficient).product::<i64>();

            let mut factors = Vec::with_capacity(12);
            factors.push(Expr::int(coefficient));
            for ((axis, term), (l1, l2)) in Axis::ALL.into_iter().zip(tuples).zip(degrees) {
                factors.extend(term.factors(l1, l2, axis));
            }

            let scaling = tuples.iter().map(|term| term.scaling_power()).sum::<i32>();
            let order = tuples.iter().map(|term| term.boys_order()).sum::<i32>();
            factors.push(Expr::power(Symbol::Scaling, scaling as i64));
            factors.push(Expr::symbol(Symbol::Boys(order as u32)));

            Expr::Product(factors)
        })
        .collect::<Vec<_>>();

    Expr::product([Expr::symbol(Symbol::Prefactor), Expr::Sum(terms)])
}
