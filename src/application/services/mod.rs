//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod solver;

pub use solver::{CheckReport, Solution, SolverService};
