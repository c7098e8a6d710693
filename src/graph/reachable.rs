//! Depth-first reachability over a [`MatrixGraph`].
//!
//! "Reachable" on an undirected graph means "in the same connected
//! component": the result of [`reachable`] is the component of the source
//! vertex, inclusive of the source itself. The traversal is read-only and
//! the returned set is a fresh object owned by the caller.

use crate::collections::{VertexMembership, VertexSet};
use crate::graph::MatrixGraph;

/// Computes the set of vertices reachable from `src`, including `src`.
///
/// Recursive depth-first search: a vertex is marked as soon as it is
/// entered, and its candidate neighbors are scanned in ascending id order,
/// recursing into each unvisited adjacent vertex before the scan resumes.
/// Each vertex is visited at most once, so recursion depth is bounded by
/// `g.num_vertices()`.
///
/// # Panics
/// Panics if `src` is out of bounds.
pub fn reachable(g: &MatrixGraph, src: usize) -> VertexSet {
    let mut seen = VertexSet::new(g.num_vertices());
    reachable_with(g, src, &mut seen);
    seen
}

/// Like [`reachable`], but marks vertices in a caller-supplied set.
///
/// Any [`VertexMembership`] container works, e.g. a
/// `std::collections::HashSet<usize>`. Vertices already present in `seen`
/// are treated as visited and not entered.
///
/// # Panics
/// Panics if `src` is out of bounds.
pub fn reachable_with<S: VertexMembership>(g: &MatrixGraph, src: usize, seen: &mut S) {
    assert!(src < g.num_vertices(), "vertex {src} out of bounds");
    #[cfg(feature = "tracing")]
    tracing::trace!(src, vertices = g.num_vertices(), "reachability search");
    dfs(g, src, seen);
}

fn dfs<S: VertexMembership>(g: &MatrixGraph, curr: usize, seen: &mut S) {
    seen.insert(curr);
    for i in 0..g.num_vertices() {
        if seen.contains(i) {
            continue;
        }
        if g.is_adjacent(curr, i) {
            dfs(g, i, seen);
        }
    }
}
