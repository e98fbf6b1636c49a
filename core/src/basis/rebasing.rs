//! Re-basing of Cartesian matrix elements onto the standard s, p, 5d and 7f
//! orbitals.
//!
//! Each basis orbital is an integer combination of triads (see
//! [`super::triad_table`] for the indices). A basis matrix cell is the outer
//! product of the combinations of its row and column orbital.
use smallvec::SmallVec;

use crate::integrals::Family;

use super::Axis;

/// Number of standard orbitals, s through f.
pub const N_BASIS_ORBITALS: usize = 16;

/// A triad (1-based index) with its integer weight inside a basis orbital.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub weight: i64,
    pub triad: usize,
}

const fn component(weight: i64, triad: usize) -> Component {
    Component { weight, triad }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BasisOrbital {
    pub label: &'static str,
    pub components: &'static [Component],
}

impl BasisOrbital {
    /// The largest triad index the orbital is built from.
    pub fn highest_triad(&self) -> usize {
        self.components
            .iter()
            .map(|component| component.triad)
            .max()
            .unwrap_or(0)
    }
}

pub const BASIS_ORBITALS: [BasisOrbital; N_BASIS_ORBITALS] = [
    BasisOrbital {
        label: "s",
        components: &[component(1, 1)],
    },
    BasisOrbital {
        label: "px",
        components: &[component(1, 2)],
    },
    BasisOrbital {
        label: "py",
        components: &[component(1, 3)],
    },
    BasisOrbital {
        label: "pz",
        components: &[component(1, 4)],
    },
    // 2zz - xx - yy
    BasisOrbital {
        label: "d(z2)",
        components: &[component(2, 7), component(-1, 5), component(-1, 6)],
    },
    BasisOrbital {
        label: "d(xz)",
        components: &[component(1, 9)],
    },
    BasisOrbital {
        label: "d(yz)",
        components: &[component(1, 10)],
    },
    BasisOrbital {
        label: "d(x2-y2)",
        components: &[component(1, 5), component(-1, 6)],
    },
    BasisOrbital {
        label: "d(xy)",
        components: &[component(1, 8)],
    },
    // 2zzz - 3xxz - 3yyz
    BasisOrbital {
        label: "f(z3)",
        components: &[component(2, 13), component(-3, 16), component(-3, 19)],
    },
    // 4xzz - xxx - xyy
    BasisOrbital {
        label: "f(xz2)",
        components: &[component(4, 17), component(-1, 11), component(-1, 14)],
    },
    // 4yzz - xxy - yyy
    BasisOrbital {
        label: "f(yz2)",
        components: &[component(4, 18), component(-1, 15), component(-1, 12)],
    },
    BasisOrbital {
        label: "f(z(x2-y2))",
        components: &[component(1, 16), component(-1, 19)],
    },
    BasisOrbital {
        label: "f(xyz)",
        components: &[component(1, 20)],
    },
    BasisOrbital {
        label: "f(x(x2-3y2))",
        components: &[component(1, 11), component(-3, 14)],
    },
    BasisOrbital {
        label: "f(y(3x2-y2))",
        components: &[component(3, 15), component(-1, 12)],
    },
];

/// Number of basis orbitals that can be built from the first `orbital_count`
/// triads: 1 -> 1, 4 -> 4, 10 -> 9 and 20 -> 16.
pub fn basis_dimension(orbital_count: usize) -> usize {
    BASIS_ORBITALS
        .iter()
        .take_while(|orbital| orbital.highest_triad() <= orbital_count)
        .count()
}

/// `weight * raw(row, col)`, with 1-based triad indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightedRef {
    pub weight: i64,
    pub row: usize,
    pub col: usize,
}

pub type CellTerms = SmallVec<[WeightedRef; 9]>;

/// A cell whose formula is given verbatim instead of being derived.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellOverride {
    pub row: usize,
    pub col: usize,
    pub terms: &'static [WeightedRef],
}

/// One cell of the basis matrix, `g(row, col)` or `g(row, col, axis)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisEntry {
    pub row: usize,
    pub col: usize,
    pub axis: Option<Axis>,
    pub terms: CellTerms,
}

/// The re-basing formulas of one integral family.
///
/// Cells are derived from [`BASIS_ORBITALS`] unless the table lists an override
/// for them. Tables are versioned so generated files can record which revision of
/// the formulas they were produced with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RebasingTable {
    pub family: Family,
    pub revision: u32,
    overrides: &'static [CellOverride],
}

impl RebasingTable {
    pub const fn new(family: Family, revision: u32, overrides: &'static [CellOverride]) -> Self {
        Self {
            family,
            revision,
            overrides,
        }
    }

    pub const fn for_family(family: Family) -> Self {
        match family {
            Family::NuclearAttraction => Self::new(family, 1, &[]),
            Family::KineticEnergy => Self::new(family, 1, &[]),
            Family::Momentum => Self::new(family, 1, &[]),
        }
    }

    pub fn overrides(&self) -> &'static [CellOverride] {
        self.overrides
    }

    /// The formula of the 1-based cell `(row, col)`, or `None` outside the 16 x 16
    /// table.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellTerms> {
        if let Some(cell) = self
            .overrides
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
        {
            return Some(cell.terms.iter().copied().collect());
        }

        let row_orbital = BASIS_ORBITALS.get(row.checked_sub(1)?)?;
        let col_orbital = BASIS_ORBITALS.get(col.checked_sub(1)?)?;

        Some(
            itertools::iproduct!(row_orbital.components, col_orbital.components)
                .map(|(a, b)| WeightedRef {
                    weight: a.weight * b.weight,
                    row: a.triad,
                    col: b.triad,
                })
                .collect(),
        )
    }

    /// All cells of a `rows x cols` basis block, row index outermost.
    pub fn entries(&self, dimensions: (usize, usize), axis: Option<Axis>) -> Vec<BasisEntry> {
        let (rows, cols) = dimensions;
        itertools::iproduct!(1..=rows, 1..=cols)
            .filter_map(|(row, col)| {
                let terms = self.cell(row, col)?;
                Some(BasisEntry {
                    row,
                    col,
                    axis,
                    terms,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::basis::{triad_of, N_TRIADS};

    use super::*;

    #[test]
    fn dimensions_per_orbital_count() {
        assert_eq!(basis_dimension(1), 1);
        assert_eq!(basis_dimension(4), 4);
        assert_eq!(basis_dimension(10), 9);
        assert_eq!(basis_dimension(20), 16);
    }

    #[test]
    fn orbitals_stay_within_one_shell() {
        for orbital in BASIS_ORBITALS {
            let shells = orbital
                .components
                .iter()
                .filter_map(|component| triad_of(component.triad))
                .map(|triad| triad.shell())
                .collect::<Vec<_>>();

            assert_eq!(shells.len(), orbital.components.len(), "{}", orbital.label);
            assert!(
                shells.windows(2).all(|pair| pair[0] == pair[1]),
                "{} mixes shells",
                orbital.label
            );
        }
    }

    #[test]
    fn s_s_cell_is_the_raw_element() {
        let table = RebasingTable::for_family(Family::KineticEnergy);
        assert_eq!(
            table.cell(1, 1).map(|terms| terms.into_vec()),
            Some(vec![WeightedRef {
                weight: 1,
                row: 1,
                col: 1
            }])
        );
    }

    #[test]
    fn weights_come_from_the_orbital_products() {
        let table = RebasingTable::for_family(Family::NuclearAttraction);
        let allowed = [1, 2, 3, 4, 6, 8, 9, 12, 16];

        for (row, col) in itertools::iproduct!(1..=16, 1..=16) {
            let terms = table.cell(row, col).unwrap_or_default();
            assert!(!terms.is_empty());
            for term in terms {
                assert!(allowed.contains(&term.weight.abs()), "g({row},{col})");
                assert!(term.row <= N_TRIADS && term.col <= N_TRIADS);
            }
        }
    }

    #[test]
    fn d_z2_squared() {
        let table = RebasingTable::for_family(Family::KineticEnergy);
        let terms = table.cell(5, 5).unwrap_or_default();

        assert_eq!(terms.len(), 9);
        assert_eq!(
            terms[0],
            WeightedRef {
                weight: 4,
                row: 7,
                col: 7
            }
        );
        assert_eq!(
            terms[8],
            WeightedRef {
                weight: 1,
                row: 6,
                col: 6
            }
        );
    }

    #[test]
    fn cells_outside_the_table() {
        let table = RebasingTable::for_family(Family::Momentum);
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 17), None);
    }

    #[test]
    fn overrides_replace_derived_cells() {
        const OVERRIDES: [CellOverride; 1] = [CellOverride {
            row: 2,
            col: 3,
            terms: &[
                WeightedRef {
                    weight: 2,
                    row: 2,
                    col: 3,
                },
                WeightedRef {
                    weight: -1,
                    row: 3,
                    col: 2,
                },
            ],
        }];

        let table = RebasingTable::new(Family::KineticEnergy, 2, &OVERRIDES);
        let derived = RebasingTable::for_family(Family::KineticEnergy);

        assert_eq!(table.cell(2, 3).unwrap_or_default().len(), 2);
        assert_eq!(derived.cell(2, 3).unwrap_or_default().len(), 1);
        assert_eq!(table.cell(3, 2), derived.cell(3, 2));
    }

    #[test]
    fn entries_cover_the_block() {
        let table = RebasingTable::for_family(Family::Momentum);
        let entries = table.entries((9, 16), Some(Axis::Y));

        assert_eq!(entries.len(), 9 * 16);
        assert_eq!((entries[0].row, entries[0].col), (1, 1));
        assert_eq!((entries[1].row, entries[1].col), (1, 2));
        assert!(entries.iter().all(|entry| entry.axis == Some(Axis::Y)));
    }
}
