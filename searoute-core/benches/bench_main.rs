use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use geo::{LineString, coord};
use searoute_core::prelude::*;

/// Square lattice of polylines, `size` x `size` vertices spaced 0.5 degrees apart
fn lattice_network(size: u32) -> SeaNetwork {
    let step = 0.5;
    let mut lines = Vec::new();

    for i in 0..size {
        let fixed = f64::from(i) * step;
        let horizontal: LineString<f64> = (0..size)
            .map(|j| coord! { x: f64::from(j) * step, y: fixed })
            .collect();
        let vertical: LineString<f64> = (0..size)
            .map(|j| coord! { x: fixed, y: f64::from(j) * step })
            .collect();
        lines.push(horizontal);
        lines.push(vertical);
    }

    SeaNetwork::new(lines)
}

fn bench_routing(c: &mut Criterion) {
    let network = lattice_network(60);
    let far_corner = 59.0 * 0.5;

    c.bench_function("find_path_lattice_corner_to_corner", |b| {
        b.iter(|| {
            find_path(
                network.graph(),
                black_box(coord! { x: 0.0, y: 0.0 }),
                black_box(coord! { x: far_corner, y: far_corner }),
            )
        });
    });

    c.bench_function("snap_to_network_lattice", |b| {
        b.iter(|| snap_to_network(&network, black_box(coord! { x: 12.3, y: 17.8 })));
    });

    let router = SeaRouter::new(network);
    c.bench_function("calculate_route_lattice", |b| {
        b.iter(|| {
            router.calculate_route(
                black_box(coord! { x: -1.0, y: 3.2 }),
                black_box(coord! { x: 31.0, y: 22.4 }),
                Units::NauticalMiles,
            )
        });
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
