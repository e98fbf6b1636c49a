//! Drives the expansion of whole generation cases.
//!
//! A case fixes how many triads each side of the matrix runs over. Every orbital
//! pair of the case is expanded, simplified and collected together with the
//! re-based entries that refer to it.
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{
    basis::{basis_dimension, triad_of, Axis, BasisEntry, RebasingTable, Triad},
    expr::Expr,
    integrals::{DefaultIntegrator, Family, Integrator, PairOrder},
    simplify::Simplifier,
};

pub use dialect::Dialect;
pub use emit::{write_boys_closed_form, write_boys_series, write_family};

mod dialect;
pub mod emit;

/// One guarded branch of a generated file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GenerationCase {
    pub switch_code: u32,
    /// Number of triads of the first and second orbital.
    pub orbitals: (usize, usize),
}

const fn case(switch_code: u32, first: usize, second: usize) -> GenerationCase {
    GenerationCase {
        switch_code,
        orbitals: (first, second),
    }
}

/// All combinations of s, sp, spd and spdf blocks except s with spdf.
pub const GENERATION_CASES: [GenerationCase; 14] = [
    case(1, 1, 1),
    case(2, 1, 4),
    case(3, 4, 1),
    case(4, 4, 4),
    case(5, 1, 10),
    case(6, 10, 1),
    case(7, 4, 10),
    case(8, 10, 4),
    case(9, 10, 10),
    case(10, 4, 20),
    case(11, 20, 4),
    case(12, 10, 20),
    case(13, 20, 10),
    case(14, 20, 20),
];

impl GenerationCase {
    pub fn basis_dimensions(&self) -> (usize, usize) {
        let (first, second) = self.orbitals;
        (basis_dimension(first), basis_dimension(second))
    }

    /// The 1-based orbital pairs of the case in the order the family emits them.
    pub fn pairs(&self, order: PairOrder) -> Vec<(usize, usize)> {
        let (first, second) = self.orbitals;
        match order {
            PairOrder::FirstOuter => itertools::iproduct!(1..=first, 1..=second).collect(),
            PairOrder::SecondOuter => itertools::iproduct!(1..=second, 1..=first)
                .map(|(j, i)| (i, j))
                .collect(),
        }
    }
}

/// A simplified raw matrix element.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEntry {
    pub row: usize,
    pub col: usize,
    pub axis: Option<Axis>,
    pub expression: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaseOutput {
    pub case: GenerationCase,
    pub raw: Vec<RawEntry>,
    pub basis: Vec<BasisEntry>,
}

impl CaseOutput {
    /// Total number of multiplied-out terms over all raw entries.
    pub fn term_count(&self) -> usize {
        self.raw
            .iter()
            .map(|entry| entry.expression.term_count())
            .sum()
    }
}

pub struct Generator<I = DefaultIntegrator> {
    family: Family,
    integrator: I,
    simplifier: Simplifier,
    table: RebasingTable,
}

impl Generator {
    pub fn new(family: Family) -> Self {
        Self::with_integrator(family, DefaultIntegrator::default())
    }
}

impl<I> Generator<I>
where
    I: Integrator<Function = Triad>,
{
    pub fn with_integrator(family: Family, integrator: I) -> Self {
        Self {
            family,
            integrator,
            simplifier: family.simplifier(),
            table: RebasingTable::for_family(family),
        }
    }

    pub fn generate_case(&self, case: &GenerationCase) -> CaseOutput {
        let pairs = case.pairs(self.family.pair_order());

        let mut raw = Vec::new();
        for integral in self.family.integrals() {
            for &(row, col) in &pairs {
                let (Some(a), Some(b)) = (triad_of(row), triad_of(col)) else {
                    log::warn!("orbital pair ({row},{col}) is outside the triad table");
                    continue;
                };

                let expression = self
                    .simplifier
                    .simplify(integral.expand(&self.integrator, (&a, &b)));
                log::trace!("{:?} ({row},{col}) = {expression}", integral);

                raw.push(RawEntry {
                    row,
                    col,
                    axis: integral.axis(),
                    expression,
                });
            }
        }

        let basis = self
            .family
            .integrals()
            .iter()
            .flat_map(|integral| {
                self.table
                    .entries(case.basis_dimensions(), integral.axis())
            })
            .collect::<Vec<_>>();

        let output = CaseOutput {
            case: *case,
            raw,
            basis,
        };
        log::debug!(
            "{} case {}: {} raw entries ({} terms), {} basis entries",
            self.family.description(),
            case.switch_code,
            output.raw.len(),
            output.term_count(),
            output.basis.len()
        );
        output
    }

    /// Generates the given cases, in parallel when the `rayon` feature is enabled.
    pub fn generate_all(&self, cases: &[GenerationCase]) -> Vec<CaseOutput> {
        #[cfg(feature = "rayon")]
        let outputs = cases.par_iter().map(|case| self.generate_case(case)).collect();

        #[cfg(not(feature = "rayon"))]
        let outputs = cases.iter().map(|case| self.generate_case(case)).collect();

        outputs
    }
}

/// All 14 cases of a family.
pub fn generate_family(family: Family) -> Vec<CaseOutput> {
    log::info!("generating {} integrals", family.description());
    Generator::new(family).generate_all(&GENERATION_CASES)
}
