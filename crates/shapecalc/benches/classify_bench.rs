//! Criterion benchmarks for the quadrilateral classifier.
//!
//! Inputs come from the seeded rectangle sampler, plus jittered copies that
//! fail the rectangle test at different stages.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapecalc::api::{
    classify_quad, draw_rectangle, is_convex, is_rectangle, sort_clockwise, Point, RectCfg,
    ReplayToken,
};

fn rectangles(n: u64, seed: u64) -> Vec<[Point; 4]> {
    (0..n)
        .map(|i| draw_rectangle(RectCfg::default(), ReplayToken::new(seed, i)).unwrap())
        .collect()
}

fn jittered(n: u64, seed: u64) -> Vec<[Point; 4]> {
    let mut rng = StdRng::seed_from_u64(seed);
    rectangles(n, seed)
        .into_iter()
        .map(|r| {
            r.map(|p| {
                Point::xy(
                    p.x + rng.gen_range(-0.1..0.1),
                    p.y + rng.gen_range(-0.1..0.1),
                )
            })
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad");
    for (label, make) in [
        ("rectangles", rectangles as fn(u64, u64) -> Vec<[Point; 4]>),
        ("jittered", jittered),
    ] {
        group.bench_with_input(BenchmarkId::new("is_rectangle", label), &make, |b, make| {
            b.iter_batched(
                || make(256, 17),
                |quads| {
                    for q in &quads {
                        black_box(is_rectangle(q));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("is_convex", label), &make, |b, make| {
            b.iter_batched(
                || make(256, 18),
                |quads| {
                    for q in &quads {
                        black_box(is_convex(q));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("classify", label), &make, |b, make| {
            b.iter_batched(
                || make(256, 19),
                |quads| {
                    for q in &quads {
                        black_box(classify_quad(q));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("sort_clockwise", |b| {
        let quads = jittered(256, 20);
        b.iter(|| {
            for q in &quads {
                black_box(sort_clockwise(q));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
