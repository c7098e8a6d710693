use std::collections::HashSet;

use lattice::{is_euler_path, reachable, Edge, MatrixGraph};
use petgraph::graph::UnGraph;
use petgraph::visit::Dfs;
use proptest::prelude::*;

/// A vertex count together with an arbitrary loop-free edge list over it.
fn graph_inputs() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..12).prop_flat_map(|n| {
        let edge = (0..n, 0..n).prop_filter("self-loops are not modeled", |(v, w)| v != w);
        (Just(n), proptest::collection::vec(edge, 0..40))
    })
}

proptest! {
    #[test]
    fn adjacency_is_always_symmetric((n, edges) in graph_inputs()) {
        let graph = MatrixGraph::from_edges(n, edges);
        for v in 0..n {
            for w in 0..n {
                prop_assert_eq!(graph.is_adjacent(v, w), graph.is_adjacent(w, v));
            }
        }
    }

    #[test]
    fn edge_count_matches_matrix((n, edges) in graph_inputs()) {
        let graph = MatrixGraph::from_edges(n, edges);
        let mut unordered_pairs = 0;
        for v in 0..n {
            for w in v + 1..n {
                if graph.is_adjacent(v, w) {
                    unordered_pairs += 1;
                }
            }
        }
        prop_assert_eq!(graph.num_edges(), unordered_pairs);
    }

    #[test]
    fn insert_remove_restores_state((n, edges) in graph_inputs(), v in 0usize..12, w in 0usize..12) {
        prop_assume!(v < n && w < n && v != w);
        let mut graph = MatrixGraph::from_edges(n, edges);
        let reference = graph.clone();

        graph.insert_edge(v, w);
        prop_assert!(graph.is_adjacent(v, w));
        graph.remove_edge(v, w);

        // remove_edge drops the edge whether or not insert_edge added it,
        // so restore it when the reference graph had it.
        if reference.is_adjacent(v, w) {
            graph.insert_edge(v, w);
        }
        prop_assert_eq!(graph, reference);
    }

    #[test]
    fn reachable_matches_petgraph((n, edges) in graph_inputs(), src_seed in 0usize..12) {
        let src = src_seed % n;
        let graph = MatrixGraph::from_edges(n, edges.iter().copied());

        let mut oracle = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..n).map(|_| oracle.add_node(())).collect();
        for &(v, w) in &edges {
            oracle.update_edge(nodes[v], nodes[w], ());
        }

        let mut want = HashSet::new();
        let mut dfs = Dfs::new(&oracle, nodes[src]);
        while let Some(node) = dfs.next(&oracle) {
            want.insert(node.index());
        }

        let got: HashSet<usize> = reachable(&graph, src).iter().collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn reachable_contains_source((n, edges) in graph_inputs(), src_seed in 0usize..12) {
        let src = src_seed % n;
        let graph = MatrixGraph::from_edges(n, edges);
        prop_assert!(reachable(&graph, src).contains(src));
    }

    /// Builds a trail by a guided walk that only ever crosses fresh edges,
    /// inserting each into the graph as it goes. The walk is an Euler path
    /// of the graph it built, by construction, and stays one short of being
    /// one if any edge is dropped.
    #[test]
    fn constructed_trails_validate(n in 2usize..8, picks in proptest::collection::vec(0usize..8, 1..24)) {
        let mut graph = MatrixGraph::new(n);
        let mut trail = Vec::new();
        let mut curr = picks[0] % n;

        for &pick in &picks[1..] {
            // First candidate at or after `pick` (cyclically) giving a fresh edge.
            let next = (0..n)
                .map(|offset| (pick + offset) % n)
                .find(|&cand| cand != curr && !graph.is_adjacent(curr, cand));
            let Some(next) = next else { break };

            graph.insert_edge(curr, next);
            trail.push(Edge::new(curr, next));
            curr = next;
        }

        prop_assert!(is_euler_path(&graph, &trail));
        if !trail.is_empty() {
            prop_assert!(!is_euler_path(&graph, &trail[..trail.len() - 1]));
        }
    }

    #[test]
    fn empty_path_is_euler_iff_graph_is_edgeless((n, edges) in graph_inputs()) {
        let graph = MatrixGraph::from_edges(n, edges);
        prop_assert_eq!(is_euler_path(&graph, &[]), graph.num_edges() == 0);
    }
}
