// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use quadrel_collide::{Disc, detect_collisions};

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
}

fn gen_discs(count: usize, radius: f64, seed: u64) -> Vec<Disc> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let p = Point::new(rng.next_f64() * UNIVERSE.x1, rng.next_f64() * UNIVERSE.y1);
            Disc::new(p, radius)
        })
        .collect()
}

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_collisions");
    for &n in &[100_usize, 1_000, 5_000] {
        let discs = gen_discs(n, 5.0, 0xC0FFEE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("round_{n}"), |b| {
            b.iter(|| black_box(detect_collisions(&discs, UNIVERSE).expect("non-empty")));
        });
    }
    group.finish();
}

fn bench_round_dense(c: &mut Criterion) {
    // Larger radii force more matches per query; stresses result collection.
    let mut group = c.benchmark_group("detect_collisions_dense");
    for &n in &[100_usize, 1_000] {
        let discs = gen_discs(n, 25.0, 0xC0FFEE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("round_{n}"), |b| {
            b.iter(|| black_box(detect_collisions(&discs, UNIVERSE).expect("non-empty")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_round, bench_round_dense);
criterion_main!(benches);
