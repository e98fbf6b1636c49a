use crate::{
    basis::{Axis, Triad},
    expr::{Expr, Symbol},
};

use super::overlap::primitive_overlap;

/// Kinetic energy `<a| -1/2 nabla^2 |b>` written as overlaps of `a` with `b`
/// shifted by two along each axis.
///
/// The sum always carries seven summands: the unshifted overlap, the three raised
/// overlaps and the three lowered ones. A lowered shift that would make a degree
/// negative contributes an explicit zero.
pub fn primitive_kinetic(triad_a: Triad, triad_b: Triad) -> Expr {
    let angular_step = |axis: Axis, delta: i32| {
        triad_b
            .shifted(axis, delta)
            .map(|shifted| primitive_overlap(triad_a, shifted))
    };

    let weight = Axis::ALL
        .iter()
        .map(|&axis| 2 * triad_b.degree(axis) + 1)
        .sum::<i32>();

    let mut terms = Vec::with_capacity(7);
    terms.push(Expr::product([
        Expr::int(weight as i64),
        Expr::symbol(Symbol::Exponent),
        primitive_overlap(triad_a, triad_b),
    ]));

    for axis in Axis::ALL {
        terms.push(match angular_step(axis, 2) {
            Some(overlap) => Expr::product([
                Expr::int(-2),
                Expr::power(Symbol::Exponent, 2),
                overlap,
            ]),
            None => Expr::zero(),
        });
    }

    for axis in Axis::ALL {
        let degree = triad_b.degree(axis) as i64;
        terms.push(match angular_step(axis, -2) {
            Some(overlap) => Expr::product([Expr::int(-(degree * degree - degree) / 2), overlap]),
            None => Expr::zero(),
        });
    }

    Expr::product([Expr::symbol(Symbol::Prefactor), Expr::Sum(terms)])
}
