//! Application layer: input adapter, output sink and services
//!
//! This layer turns user-facing text into domain calls and back.

pub mod error;
pub mod parser;
pub mod problem;
pub mod render;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use problem::Problem;
pub use render::{format_distance_sums, render_tree, OutputStyle};
pub use services::{CheckReport, Solution, SolverService};
