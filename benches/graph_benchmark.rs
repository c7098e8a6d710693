use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice::{is_euler_path, reachable, Edge, MatrixGraph};

fn chain(n: usize) -> MatrixGraph {
    MatrixGraph::from_edges(n, (0..n - 1).map(|v| (v, v + 1)))
}

fn complete(n: usize) -> MatrixGraph {
    let mut graph = MatrixGraph::new(n);
    for v in 0..n {
        for w in v + 1..n {
            graph.insert_edge(v, w);
        }
    }
    graph
}

fn bench_edge_churn(c: &mut Criterion) {
    let size = 256;

    c.bench_function("matrix_graph_build_chain", |b| {
        b.iter(|| black_box(chain(size)));
    });

    c.bench_function("matrix_graph_insert_remove", |b| {
        let mut graph = MatrixGraph::new(size);
        b.iter(|| {
            for v in 0..size - 1 {
                graph.insert_edge(v, v + 1);
            }
            for v in 0..size - 1 {
                graph.remove_edge(v, v + 1);
            }
            black_box(graph.num_edges());
        });
    });
}

fn bench_reachable(c: &mut Criterion) {
    let chain_graph = chain(256);
    c.bench_function("reachable_chain_256", |b| {
        b.iter(|| black_box(reachable(&chain_graph, 0)));
    });

    let dense_graph = complete(64);
    c.bench_function("reachable_complete_64", |b| {
        b.iter(|| black_box(reachable(&dense_graph, 0)));
    });
}

fn bench_euler(c: &mut Criterion) {
    // Cycle 0-1-...-127-0, walked in order: the worst case exercises all
    // four checks including the quadratic repetition scan.
    let size = 128;
    let mut graph = chain(size);
    graph.insert_edge(size - 1, 0);

    let mut trail: Vec<Edge> = (0..size - 1).map(|v| Edge::new(v, v + 1)).collect();
    trail.push(Edge::new(size - 1, 0));

    c.bench_function("is_euler_path_cycle_128", |b| {
        b.iter(|| black_box(is_euler_path(&graph, &trail)));
    });
}

criterion_group!(benches, bench_edge_churn, bench_reachable, bench_euler);
criterion_main!(benches);
