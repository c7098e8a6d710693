//! # `lattice` — compact undirected graphs on a dense adjacency matrix
//!
//! A small graph toolkit built around one representation: an undirected
//! graph over a fixed, pre-declared vertex set, stored as a contiguous
//! row-major boolean matrix. On top of it sit two algorithms:
//!
//! - **Reachability** ([`reachable`]): the connected component of a source
//!   vertex, computed by depth-first search into a caller-owned
//!   [`VertexSet`] (or any [`VertexMembership`] container).
//! - **Euler-path validation** ([`is_euler_path`]): a pure predicate that
//!   judges whether a candidate ordered edge sequence uses every edge of
//!   the graph exactly once as one unbroken trail.
//!
//! ## Contract model
//!
//! Vertex ids are `usize` indices in `0..num_vertices()`. Passing an
//! out-of-range id to a graph operation is a contract violation and panics;
//! it is never reported as a recoverable error. The one deliberate
//! exception is [`is_euler_path`], which treats malformed candidate paths
//! (including out-of-range ids) as invalid input and returns `false`.
//!
//! The matrix costs \(O(n^2)\) memory by design — this crate targets small,
//! dense vertex sets, not large sparse graphs. The graph is exclusively
//! owned by its creator; there is no interior mutability and no internal
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use lattice::{is_euler_path, reachable, Edge, MatrixGraph};
//!
//! let mut g = MatrixGraph::new(4);
//! g.insert_edge(0, 1);
//! g.insert_edge(1, 2);
//! g.insert_edge(2, 0);
//!
//! let component = reachable(&g, 0);
//! assert!(component.contains(2));
//! assert!(!component.contains(3));
//!
//! let trail = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
//! assert!(is_euler_path(&g, &trail));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{VertexMembership, VertexSet};
pub use graph::{is_euler_path, reachable, reachable_with, Edge, GraphStatistics, MatrixGraph};

// Compile-time layout checks for the value types that cross API boundaries.
const _: () = {
    use core::mem;

    // An `Edge` is exactly two vertex ids, nothing more.
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<usize>());

    // `VertexSet` stays three words plus its word buffer.
    assert!(mem::size_of::<VertexSet>() <= mem::size_of::<usize>() * 5);
};
