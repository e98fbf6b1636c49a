//! Two-center overlap expansion.
//!
//! Along one axis the overlap of `x_A^l1` and `x_B^l2` Gaussians is
//!
//!   sum_j sum_s binom(l1, s) binom(l2, 2j - s) (2j-1)!! / 2^j
//!       * PA^(l1 - s) * PB^(l2 - 2j + s) * gam^(-j)
//!
//! with `j` running to `(l1 + l2) / 2` and `s` to `2j`. The exponential and
//! `(pi/gam)^(3/2)` parts live in the prefactor.
use num_rational::Rational64;

use crate::{
    basis::{Axis, Triad},
    combinatorics::{binomial, double_factorial},
    expr::{Center, Expr, Symbol},
};

/// The one-dimensional overlap sum. Terms whose binomial product vanishes stay in
/// the sum as explicit zeros.
pub fn overlap_axis(l1: i32, l2: i32, axis: Axis) -> Expr {
    let pa = Symbol::Displacement(Center::A, axis);
    let pb = Symbol::Displacement(Center::B, axis);

    let mut terms = Vec::new();
    for j in 0..=(l1 + l2) / 2 {
        for s in 0..=2 * j {
            let binomials = binomial(l1, s) * binomial(l2, 2 * j - s);
            if binomials == 0 {
                terms.push(Expr::zero());
                continue;
            }

            let coefficient = Rational64::new(binomials * double_factorial(2 * j - 1), 1 << j);
            terms.push(Expr::product([
                Expr::Number(coefficient),
                Expr::power(pa, (l1 - s) as i64),
                Expr::power(pb, (l2 - 2 * j + s) as i64),
                Expr::power(Symbol::TotalExponent, -j as i64),
            ]));
        }
    }

    Expr::Sum(terms)
}

/// Full three-dimensional overlap of two triads: the product of the axis sums.
pub fn primitive_overlap(triad_a: Triad, triad_b: Triad) -> Expr {
    Expr::product(
        Axis::ALL.map(|axis| overlap_axis(triad_a.degree(axis), triad_b.degree(axis), axis)),
    )
}
