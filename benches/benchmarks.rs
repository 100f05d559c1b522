//! Criterion benchmarks for adjacency-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjacency_graph::graph::{DirectedGraph, OrderRecorder};

/// Build a random graph with `edges_per_vertex` outgoing edges per vertex.
fn make_random_graph(vertex_count: usize, edges_per_vertex: usize) -> DirectedGraph<u32, u32, ()> {
    let mut rng = rand::thread_rng();
    let mut graph = DirectedGraph::from_vertices(0..vertex_count as u32, ());
    for source in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            let _ = graph.add_edge(source, target, rng.gen_range(1..100));
        }
    }
    graph
}

fn bench_add_edges(c: &mut Criterion) {
    c.bench_function("add_edges_10k", |b| {
        b.iter(|| black_box(make_random_graph(10_000, 5)))
    });
}

fn bench_traversals(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5);

    c.bench_function("bfs_traverse_10k", |b| {
        b.iter(|| {
            let mut rec = OrderRecorder::new();
            graph.breadth_first_traverse(&mut rec).unwrap();
            black_box(rec.discovered.len())
        })
    });

    c.bench_function("dfs_traverse_10k", |b| {
        b.iter(|| {
            let mut rec = OrderRecorder::new();
            graph.depth_first_traverse(&mut rec).unwrap();
            black_box(rec.discovered.len())
        })
    });
}

fn bench_get_edge(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5);
    let mut rng = rand::thread_rng();
    c.bench_function("get_edge_10k", |b| {
        b.iter(|| {
            let s = rng.gen_range(0..10_000);
            let t = rng.gen_range(0..10_000);
            black_box(graph.get_edge(s, t))
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let graph = make_random_graph(2_000, 5);
    c.bench_function("remove_vertex_2k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| black_box(g.remove_vertex(1_000)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_traversals,
    bench_get_edge,
    bench_remove_vertex
);
criterion_main!(benches);
