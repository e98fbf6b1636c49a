pub use rebasing::{basis_dimension, BasisEntry, BasisOrbital, RebasingTable, WeightedRef};
pub use triad::{triad_of, triad_table, Axis, Triad, N_TRIADS};

pub mod rebasing;
mod triad;
