// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point, Rect};
use quadrel_tree::{PointQuadtree, point_in_circle};

const UNIVERSE: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self) -> Point {
        Point::new(self.next_f64() * UNIVERSE.x1, self.next_f64() * UNIVERSE.y1)
    }
}

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.point()).collect()
}

fn build_tree(points: &[Point]) -> PointQuadtree<Point> {
    let mut tree = PointQuadtree::new(points[0], UNIVERSE);
    for p in &points[1..] {
        tree.insert(*p);
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[100_usize, 1_000, 10_000] {
        let points = gen_points(n, 0xDEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(build_tree(&pts)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_find_in_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_in_circle");
    for &n in &[100_usize, 1_000, 10_000] {
        let points = gen_points(n, 0xDEAD_BEEF);
        let tree = build_tree(&points);
        let mut rng = Rng::new(0x5EED);
        let queries: Vec<Circle> = (0..64)
            .map(|_| Circle::new(rng.point(), 10.0 + rng.next_f64() * 40.0))
            .collect();

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("pruned_{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(tree.find_in_circle(q));
                }
            });
        });
        group.bench_function(format!("brute_{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    let hits: Vec<&Point> =
                        points.iter().filter(|p| point_in_circle(**p, q)).collect();
                    black_box(hits);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_find_in_circle);
criterion_main!(benches);
