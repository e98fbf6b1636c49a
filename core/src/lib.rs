pub mod basis;
pub mod boys;
pub mod combinatorics;
pub mod config;
pub mod expr;
pub mod generation;
pub mod integrals;
pub mod simplify;
