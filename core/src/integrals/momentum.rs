use crate::{
    basis::{Axis, Triad},
    expr::{Expr, Symbol},
};

use super::overlap::primitive_overlap;

/// Linear momentum `<a| d/d(axis) |b>`: the degree of `b` along the axis times the
/// overlap with `b` lowered by one, minus `2*a2` times the overlap with `b` raised
/// by one. The lowered summand is an explicit zero when the degree is 0.
pub fn primitive_momentum(triad_a: Triad, triad_b: Triad, axis: Axis) -> Expr {
    let degree = triad_b.degree(axis);

    let lowered = triad_b.shifted(axis, -1).map_or_else(Expr::zero, |lowered| {
        Expr::product([Expr::int(degree as i64), primitive_overlap(triad_a, lowered)])
    });
    let raised = triad_b.shifted(axis, 1).map_or_else(Expr::zero, |raised| {
        Expr::product([
            Expr::int(-2),
            Expr::symbol(Symbol::Exponent),
            primitive_overlap(triad_a, raised),
        ])
    });

    Expr::product([
        Expr::symbol(Symbol::Prefactor),
        Expr::sum([lowered, raised]),
    ])
}
