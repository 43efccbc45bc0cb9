// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for the distance engine and the full metrics rebuild

use closerank::closeness::compute_closeness;
use closerank::coordinator::Generation;
use closerank::distance::compute_distances;
use closerank::graph::SocialGraph;
use closerank::types::NodeId;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Ring of `n` nodes with chords every 7 nodes
fn ring_graph(n: u64) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for i in 0..n {
        graph.append_link(NodeId(i), NodeId((i + 1) % n));
        if i % 7 == 0 {
            graph.append_link(NodeId(i), NodeId((i + n / 2) % n));
        }
    }
    graph
}

fn bench_distances(c: &mut Criterion) {
    let graph = ring_graph(60);
    c.bench_function("compute_distances_ring60", |b| {
        b.iter(|| compute_distances(black_box(&graph)));
    });
}

fn bench_closeness(c: &mut Criterion) {
    let graph = ring_graph(60);
    let distances = compute_distances(&graph);
    c.bench_function("compute_closeness_ring60", |b| {
        b.iter(|| compute_closeness(black_box(&distances)));
    });
}

fn bench_full_rebuild(c: &mut Criterion) {
    let graph = ring_graph(40);
    c.bench_function("generation_rebuild_ring40", |b| {
        b.iter(|| {
            Generation::rebuild(
                black_box(graph.clone()),
                vec![NodeId(0), NodeId(20)],
            )
        });
    });
}

criterion_group!(benches, bench_distances, bench_closeness, bench_full_rebuild);
criterion_main!(benches);
