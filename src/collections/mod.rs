//! Supporting containers for graph algorithms.

pub mod vertex_set;

pub use vertex_set::{VertexMembership, VertexSet};
