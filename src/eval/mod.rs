//! Position evaluation for the Pentaroll AI

pub mod heuristic;

pub use heuristic::evaluate;
