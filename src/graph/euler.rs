//! Euler-path validation over a [`MatrixGraph`].
//!
//! An Euler path is a trail that uses every edge of the graph exactly once.
//! [`is_euler_path`] is a *validator*: it judges a supplied candidate edge
//! sequence and never searches for a path itself (it does not, for example,
//! test the classical odd-degree existence conditions).

use serde::{Deserialize, Serialize};

use crate::graph::MatrixGraph;

/// One traversal step along an undirected edge: from `v` to `w`.
///
/// The graph itself stores only edge existence; direction exists only in
/// candidate paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail vertex, where the step starts.
    pub v: usize,
    /// Head vertex, where the step ends.
    pub w: usize,
}

impl Edge {
    /// Creates a traversal step from `v` to `w`.
    pub fn new(v: usize, w: usize) -> Self {
        Self { v, w }
    }

    /// Returns whether `self` and `other` denote the same undirected edge,
    /// in either orientation.
    #[inline]
    pub fn same_undirected(self, other: Edge) -> bool {
        (self.v == other.v && self.w == other.w) || (self.v == other.w && self.w == other.v)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((v, w): (usize, usize)) -> Self {
        Self { v, w }
    }
}

/// Returns whether `path` is a valid Euler path over `g`'s current edges.
///
/// Four checks, each short-circuiting to `false`, in order:
///
/// 1. **Count**: the path has exactly `g.num_edges()` entries — an Euler
///    path must use every edge.
/// 2. **Membership**: every entry names an edge present in the graph.
///    Adjacency is symmetric, so a reversed orientation of an existing edge
///    passes; an entry whose vertex ids fall outside the graph cannot name
///    an edge and fails.
/// 3. **Continuity**: each entry's head is the next entry's tail — the path
///    is one unbroken trail.
/// 4. **No repetition**: no two entries denote the same undirected edge, in
///    the same or reversed orientation.
///
/// Checks 1, 2 and 4 together make the path a permutation of the graph's
/// edge set; check 3 alone establishes trail connectivity. None is
/// redundant.
///
/// This is a total predicate: a malformed candidate yields `false`, never a
/// panic. Runs in \(O(len^2)\) with no allocation.
pub fn is_euler_path(g: &MatrixGraph, path: &[Edge]) -> bool {
    // 1. An Euler path uses every edge, so the lengths must agree.
    if path.len() != g.num_edges() {
        #[cfg(feature = "tracing")]
        tracing::trace!(got = path.len(), want = g.num_edges(), "euler: edge count mismatch");
        return false;
    }

    // 2. Every entry must be an edge of the graph.
    for e in path {
        let in_bounds = e.v < g.num_vertices() && e.w < g.num_vertices();
        if !in_bounds || !g.is_adjacent(e.v, e.w) {
            #[cfg(feature = "tracing")]
            tracing::trace!(v = e.v, w = e.w, "euler: edge not in graph");
            return false;
        }
    }

    // 3. The head of each step must be the tail of the next.
    for pair in path.windows(2) {
        if pair[0].w != pair[1].v {
            #[cfg(feature = "tracing")]
            tracing::trace!(head = pair[0].w, tail = pair[1].v, "euler: trail broken");
            return false;
        }
    }

    // 4. No undirected edge may appear twice, in either orientation.
    for (i, &e) in path.iter().enumerate() {
        if path[i + 1..].iter().any(|&later| e.same_undirected(later)) {
            #[cfg(feature = "tracing")]
            tracing::trace!(v = e.v, w = e.w, "euler: repeated edge");
            return false;
        }
    }

    true
}
