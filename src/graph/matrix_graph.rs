//! An undirected graph over a fixed vertex set, stored as a dense
//! adjacency matrix.
//!
//! The matrix is one contiguous `Vec<bool>` of length `n * n`, indexed
//! `v * n + w` — cache-friendly row-major storage with no per-row
//! allocations. Both `(v, w)` and `(w, v)` entries are kept in lockstep, so
//! adjacency is symmetric at all times and `num_edges` counts unordered
//! pairs.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `is_adjacent` | \(O(1)\) |
//! | `insert_edge` / `remove_edge` | \(O(1)\) |
//! | `degree` / `neighbors` | \(O(n)\) |
//! | memory | \(O(n^2)\) |
//!
//! Vertex arguments are contract-checked: passing an id outside
//! `0..num_vertices()`, or `v == w` to an edge mutation (self-loops are not
//! modeled), panics. The graph is exclusively owned; callers needing shared
//! or concurrent access must wrap it externally.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A mutable undirected adjacency-matrix graph with a fixed vertex count.
#[derive(Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<bool>,
}

impl MatrixGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            adjacency: vec![false; vertex_count * vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// # Panics
    /// Panics if any endpoint is out of bounds or any pair is a self-loop.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.insert_edge(v, w);
        }
        graph
    }

    /// Returns the number of vertices, fixed for the graph's lifetime.
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of undirected edges currently present.
    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    #[inline(always)]
    fn idx(&self, v: usize, w: usize) -> usize {
        v * self.vertex_count + w
    }

    #[inline(always)]
    fn check_vertex(&self, v: usize) {
        assert!(v < self.vertex_count, "vertex {v} out of bounds");
    }

    /// Returns whether an edge exists between `v` and `w`.
    ///
    /// # Panics
    /// Panics if `v` or `w` is out of bounds.
    #[inline]
    pub fn is_adjacent(&self, v: usize, w: usize) -> bool {
        self.check_vertex(v);
        self.check_vertex(w);
        self.adjacency[self.idx(v, w)]
    }

    /// Inserts the undirected edge `{v, w}`.
    ///
    /// Inserting an edge that already exists is a no-op: the matrix and the
    /// edge count are unchanged.
    ///
    /// # Panics
    /// Panics if `v` or `w` is out of bounds, or if `v == w` (self-loops are
    /// not modeled).
    pub fn insert_edge(&mut self, v: usize, w: usize) {
        self.check_vertex(v);
        self.check_vertex(w);
        assert_ne!(v, w, "self-loop on vertex {v} is not supported");

        if self.adjacency[self.idx(v, w)] {
            return;
        }

        let (vw, wv) = (self.idx(v, w), self.idx(w, v));
        self.adjacency[vw] = true;
        self.adjacency[wv] = true;
        self.edge_count += 1;
    }

    /// Removes the undirected edge `{v, w}`.
    ///
    /// Removing an absent edge is a no-op.
    ///
    /// # Panics
    /// Panics if `v` or `w` is out of bounds, or if `v == w`.
    pub fn remove_edge(&mut self, v: usize, w: usize) {
        self.check_vertex(v);
        self.check_vertex(w);
        assert_ne!(v, w, "self-loop on vertex {v} is not supported");

        if !self.adjacency[self.idx(v, w)] {
            return;
        }

        let (vw, wv) = (self.idx(v, w), self.idx(w, v));
        self.adjacency[vw] = false;
        self.adjacency[wv] = false;
        self.edge_count -= 1;
    }

    /// Returns the number of neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn degree(&self, v: usize) -> usize {
        self.check_vertex(v);
        let row = self.idx(v, 0);
        self.adjacency[row..row + self.vertex_count]
            .iter()
            .filter(|&&adjacent| adjacent)
            .count()
    }

    /// Iterates over the neighbors of `v` in ascending id order.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.check_vertex(v);
        let row = self.idx(v, 0);
        self.adjacency[row..row + self.vertex_count]
            .iter()
            .enumerate()
            .filter_map(|(w, &adjacent)| adjacent.then_some(w))
    }

    /// Computes degree statistics over the whole graph.
    pub fn statistics(&self) -> GraphStatistics {
        let degrees = (0..self.vertex_count).map(|v| self.degree(v));
        let (mut min_degree, mut max_degree) = (usize::MAX, 0);
        for d in degrees {
            min_degree = min_degree.min(d);
            max_degree = max_degree.max(d);
        }
        if self.vertex_count == 0 {
            min_degree = 0;
        }

        GraphStatistics {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            min_degree,
            max_degree,
            average_degree: if self.vertex_count == 0 {
                0.0
            } else {
                // Each undirected edge contributes to two degrees.
                (2 * self.edge_count) as f64 / self.vertex_count as f64
            },
        }
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of vertices: {}", self.vertex_count)?;
        writeln!(f, "Number of edges: {}", self.edge_count)?;
        writeln!(f, "Edges:")?;
        for v in 0..self.vertex_count {
            write!(f, "{v:2}:")?;
            for w in self.neighbors(v) {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixGraph")
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edge_count)
            .finish_non_exhaustive()
    }
}

/// Degree statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all vertices (0 for the empty graph).
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}
