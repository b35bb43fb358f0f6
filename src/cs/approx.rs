//! Approximation and heuristic strategies kept as baselines for the exact
//! solvers in [`crate::cs::dynamic`].

pub mod greedy_change;

pub use greedy_change::greedy_change;
