//! Efficient frontier estimation.

pub mod sweep;

pub use sweep::sweep_frontier;
