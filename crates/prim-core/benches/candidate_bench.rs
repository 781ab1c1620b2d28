//! # Candidate Benchmarks
//!
//! Performance benchmarks for frontier computation and full runs.
//!
//! Run with: `cargo bench -p prim-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prim_core::{CandidateEngine, EdgeWeight, Engine, Graph, GraphStore, NodeId, Position, prim};
use std::collections::BTreeSet;
use std::hint::black_box;

/// A grid of `side * side` nodes with right and down edges.
fn create_grid_graph(side: u64) -> Graph {
    let mut graph = Graph::new();
    for i in 0..side * side {
        graph.add_node(Position::new((i % side) as i64, (i / side) as i64));
    }
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let weight = EdgeWeight::new((id * 7 + 3) % 13);
            if col + 1 < side {
                let _ = graph.add_edge(NodeId(id), NodeId(id + 1), weight);
            }
            if row + 1 < side {
                let _ = graph.add_edge(NodeId(id), NodeId(id + side), weight);
            }
        }
    }
    graph
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_cut_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_set");

    for side in [10u64, 30, 60].iter() {
        let graph = create_grid_graph(*side);
        // Left half of the grid is visited.
        let visited: BTreeSet<NodeId> = (0..side * side)
            .filter(|i| i % side < side / 2)
            .map(NodeId)
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| {
                let cut = CandidateEngine::cut_set(graph, &visited);
                black_box(CandidateEngine::minimum(&cut))
            });
        });
    }

    group.finish();
}

fn bench_full_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_prim");

    for side in [10u64, 20, 40].iter() {
        let graph = create_grid_graph(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| black_box(prim(graph, NodeId(0))));
        });
    }

    group.finish();
}

fn bench_hinted_session(c: &mut Criterion) {
    let graph = create_grid_graph(20);

    c.bench_function("hinted_session_20x20", |b| {
        b.iter(|| {
            let mut engine = Engine::with_graph(graph.clone());
            let _ = engine.start_session(NodeId(0));
            while engine.request_hint().is_some() {}
            black_box(engine.total_cost())
        });
    });
}

criterion_group!(benches, bench_cut_set, bench_full_prim, bench_hinted_session);
criterion_main!(benches);
