//! Criterion benchmarks for sampling, line building and heat aggregation.
//! Focus: a 6 m room with `walls` random interior partitions, walls in {0, 4, 16}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spacesyntax::geom2::{Polygon, PolygonSet};
use spacesyntax::heatmap::build_heat_field;
use spacesyntax::lines::{build_connectivity_lines, build_visibility_lines};
use spacesyntax::sampling::sample_grid;

fn random_plan(walls: usize, seed: u64) -> PolygonSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut polys = vec![Polygon::from_xy(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (0.0, 6.0),
    ])];
    for _ in 0..walls {
        // thin axis-aligned slab somewhere inside the room
        let x = rng.gen_range(0.5..5.0);
        let y = rng.gen_range(0.5..5.0);
        let len = rng.gen_range(0.3..1.0);
        let (w, h) = if rng.gen::<bool>() { (len, 0.05) } else { (0.05, len) };
        polys.push(Polygon::from_xy(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)]));
    }
    PolygonSet::new(polys)
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    for &walls in &[0usize, 4, 16] {
        let plan = random_plan(walls, 43);
        let main = plan.polygons[0].clone();

        group.bench_with_input(BenchmarkId::new("visibility_0.5", walls), &walls, |b, _| {
            b.iter_batched(
                || sample_grid(&main, 0.5),
                |pts| {
                    let _ls = build_visibility_lines(&pts, &plan);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("connectivity_0.25", walls), &walls, |b, _| {
            b.iter_batched(
                || sample_grid(&main, 0.25),
                |pts| {
                    let _ls = build_connectivity_lines(&pts, &plan, 0.75);
                },
                BatchSize::SmallInput,
            )
        });

        let vis = build_visibility_lines(&sample_grid(&main, 0.5), &plan);
        group.bench_with_input(BenchmarkId::new("heat_field_0.1", walls), &walls, |b, _| {
            b.iter(|| {
                let _f = build_heat_field(&main, &vis, 0.1);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lines);
criterion_main!(benches);
