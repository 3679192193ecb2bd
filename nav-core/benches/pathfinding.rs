//! Benchmark for shortest-path queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nav_core::{GraphStore, Snapshot};

/// Square grid with unit-ish weights, `side * side` locations.
fn grid(side: usize) -> Snapshot {
    let mut store = GraphStore::new();
    let name = |r: usize, c: usize| format!("{}-{}", r, c);

    for r in 0..side {
        for c in 0..side {
            store.add_node(&name(r, c)).expect("unique name");
        }
    }
    for r in 0..side {
        for c in 0..side {
            let weight = 1.0 + ((r * 7 + c * 13) % 5) as f64;
            if c + 1 < side {
                store
                    .add_or_update_edge(&name(r, c), &name(r, c + 1), weight)
                    .expect("valid edge");
            }
            if r + 1 < side {
                store
                    .add_or_update_edge(&name(r, c), &name(r + 1, c), weight)
                    .expect("valid edge");
            }
        }
    }
    store.snapshot()
}

fn bench_campus_sized(c: &mut Criterion) {
    let snapshot = grid(10);
    c.bench_function("shortest_path_grid_100", |b| {
        b.iter(|| black_box(snapshot.shortest_path("0-0", "9-9")))
    });
}

fn bench_large_grid(c: &mut Criterion) {
    let snapshot = grid(100);
    c.bench_function("shortest_path_grid_10000", |b| {
        b.iter(|| black_box(snapshot.shortest_path("0-0", "99-99")))
    });
}

criterion_group!(benches, bench_campus_sized, bench_large_grid);
criterion_main!(benches);
