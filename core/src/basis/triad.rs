use serde::{Deserialize, Serialize};

/// Number of Cartesian components covered by the generator (s, p, d and f shells).
pub const N_TRIADS: usize = 20;

/// A Cartesian axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 0-based position of the axis in a triad or vector.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub const fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Cartesian exponents `(lx, ly, lz)` of a Gaussian orbital component,
/// i.e. the polynomial part `x^lx * y^ly * z^lz`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triad(pub i32, pub i32, pub i32);

impl Triad {
    pub const fn new(lx: i32, ly: i32, lz: i32) -> Self {
        Self(lx, ly, lz)
    }

    /// The exponent along `axis`.
    pub const fn degree(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.0,
            Axis::Y => self.1,
            Axis::Z => self.2,
        }
    }

    /// Total angular momentum: 0 for s, 1 for p, 2 for d, 3 for f.
    pub const fn shell(&self) -> i32 {
        self.0 + self.1 + self.2
    }

    /// The triad with `delta` added along `axis`, or `None` if that exponent would
    /// become negative.
    #[inline(always)]
    pub fn shifted(self, axis: Axis, delta: i32) -> Option<Self> {
        let Self(lx, ly, lz) = self;

        let shifted = match axis {
            Axis::X => Self(lx + delta, ly, lz),
            Axis::Y => Self(lx, ly + delta, lz),
            Axis::Z => Self(lx, ly, lz + delta),
        };

        (shifted.degree(axis) >= 0).then_some(shifted)
    }
}

impl std::fmt::Display for Triad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let &Self(lx, ly, lz) = self;
        write!(f, "({lx},{ly},{lz})")
    }
}

/// The 20 triads in their canonical order. Re-basing tables and emitted matrix
/// indices refer to triads by their (1-based) position in this table.
pub const fn triad_table() -> [Triad; N_TRIADS] {
    [
        // s
        Triad(0, 0, 0),
        // p
        Triad(1, 0, 0),
        Triad(0, 1, 0),
        Triad(0, 0, 1),
        // d
        Triad(2, 0, 0),
        Triad(0, 2, 0),
        Triad(0, 0, 2),
        Triad(1, 1, 0),
        Triad(1, 0, 1),
        Triad(0, 1, 1),
        // f
        Triad(3, 0, 0),
        Triad(0, 3, 0),
        Triad(0, 0, 3),
        Triad(1, 2, 0),
        Triad(2, 1, 0),
        Triad(2, 0, 1),
        Triad(1, 0, 2),
        Triad(0, 1, 2),
        Triad(0, 2, 1),
        Triad(1, 1, 1),
    ]
}

/// Looks up the triad of a 1-based orbital index.
pub fn triad_of(orbital: usize) -> Option<Triad> {
    orbital
        .checked_sub(1)
        .and_then(|index| triad_table().get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every Cartesian component of a shell, in `iproduct!` order.
    fn shell_components(shell: i32) -> Vec<Triad> {
        itertools::iproduct!(0..=shell, 0..=shell, 0..=shell)
            .filter(|(i, j, k)| i + j + k == shell)
            .map(|(i, j, k)| Triad(i, j, k))
            .collect()
    }

    #[test]
    fn table_covers_each_shell_exactly_once() {
        let table = triad_table();

        for shell in 0..=3 {
            let mut expected = shell_components(shell);
            let mut found = table
                .iter()
                .copied()
                .filter(|triad| triad.shell() == shell)
                .collect::<Vec<_>>();

            expected.sort_by_key(|t| (t.0, t.1, t.2));
            found.sort_by_key(|t| (t.0, t.1, t.2));
            assert_eq!(found, expected, "shell {shell} is not covered exactly");
        }
    }

    #[test]
    fn shells_appear_in_ascending_order() {
        let shells = triad_table().map(|triad| triad.shell());
        assert!(shells.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn lookup_is_one_based() {
        assert_eq!(triad_of(0), None);
        assert_eq!(triad_of(1), Some(Triad(0, 0, 0)));
        assert_eq!(triad_of(4), Some(Triad(0, 0, 1)));
        assert_eq!(triad_of(20), Some(Triad(1, 1, 1)));
        assert_eq!(triad_of(21), None);
    }

    #[test]
    fn shifting_below_zero_yields_none() {
        let px = Triad(1, 0, 0);
        assert_eq!(px.shifted(Axis::X, 2), Some(Triad(3, 0, 0)));
        assert_eq!(px.shifted(Axis::X, -1), Some(Triad(0, 0, 0)));
        assert_eq!(px.shifted(Axis::X, -2), None);
        assert_eq!(px.shifted(Axis::Y, -1), None);
    }
}
