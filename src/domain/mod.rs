//! Domain layer: the tree builder and the distance aggregator
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod adjacency;
pub mod aggregator;
pub mod builder;
pub mod entities;
pub mod error;
pub mod verify;

pub use adjacency::{Adjacency, PostOrderIterator, PreOrderIterator, Visit};
pub use aggregator::DistanceAggregator;
pub use builder::{TreeBuilder, MAX_NODE_COUNT};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use verify::{brute_force_distance_sums, check_against_brute_force, check_edge_identity};
