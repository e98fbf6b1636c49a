//! Expressions for the Boys function `F_N(T)`.
//!
//! [`closed_form`] is exact for every `T > 0` but loses precision as `T` goes to 0,
//! [`series`] is the truncated expansion the consumer switches to below a cutoff.
use num_rational::Rational64;

use crate::{
    combinatorics::factorial,
    expr::{Expr, Function, Symbol},
};

/// Highest Boys order the expansions of f functions need.
pub const MAX_ORDER: u32 = 10;

/// Number of terms of the small-argument series.
pub const SERIES_TERMS: u32 = 7;

/// `F_N(T) = (2N)!/(2 N!) [ sqrt(pi)/4^N T^-(N+1/2) erf(sqrt(T))
///     - exp(-T) sum_{k<N} (N-k)!/(4^k (2N-2k)!) T^-(k+1) ]`
pub fn closed_form(order: u32) -> Expr {
    let n = order as i32;
    let t = Symbol::BoysArgument;

    let erf_term = Expr::product([
        Expr::rational(1, 4i64.pow(order)),
        Expr::call(Function::Sqrt, Expr::symbol(Symbol::Pi)),
        Expr::power_ratio(t, Rational64::new(-(2 * n as i64 + 1), 2)),
        Expr::call(Function::Erf, Expr::call(Function::Sqrt, Expr::symbol(t))),
    ]);

    let tail = if n == 0 {
        Expr::zero()
    } else {
        Expr::sum((0..n).map(|k| {
            Expr::product([
                Expr::rational(
                    factorial(n - k),
                    4i64.pow(k as u32) * factorial(2 * n - 2 * k),
                ),
                Expr::power(t, -(k as i64 + 1)),
            ])
        }))
    };
    let exp_term = Expr::product([
        Expr::int(-1),
        Expr::call(
            Function::Exp,
            Expr::product([Expr::int(-1), Expr::symbol(t)]),
        ),
        tail,
    ]);

    Expr::product([
        Expr::rational(factorial(2 * n), 2 * factorial(n)),
        Expr::sum([erf_term, exp_term]),
    ])
}

/// `S_N(T) = 1/2 exp(-T) sum_{i<7} Gamma(N+1/2)/Gamma(N+i+3/2) T^i`.
///
/// The gamma ratio is the exact rational `2^(i+1) / prod_{k<=i} (2N+2k+1)`.
pub fn series(order: u32) -> Expr {
    let n = order as i64;
    let t = Symbol::BoysArgument;

    let mut denominator = 1;
    let terms = (0..SERIES_TERMS as i64).map(|i| {
        denominator *= 2 * n + 2 * i + 1;
        Expr::product([
            Expr::rational(1 << (i + 1), denominator),
            Expr::power(t, i),
        ])
    });

    Expr::product([
        Expr::rational(1, 2),
        Expr::call(
            Function::Exp,
            Expr::product([Expr::int(-1), Expr::symbol(t)]),
        ),
        Expr::sum(terms),
    ])
}
