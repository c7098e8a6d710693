//! Graph representation and algorithms.
//!
//! - [`matrix_graph`]: the dense adjacency-matrix representation
//! - [`reachable`]: depth-first reachability
//! - [`euler`]: Euler-path validation

pub mod euler;
pub mod matrix_graph;
pub mod reachable;

pub use euler::{is_euler_path, Edge};
pub use matrix_graph::{GraphStatistics, MatrixGraph};
pub use reachable::{reachable, reachable_with};
