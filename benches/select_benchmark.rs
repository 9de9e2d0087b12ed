use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use introselect::select_one;
use rand::Rng;
use std::hint::black_box;

fn bench_single_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("single-target select");
    group.sample_size(30);

    let mut rng = rand::rng();
    let n = 100_000usize;
    let data: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0e9..1.0e9)).collect();

    group.bench_function("select_one (median)", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| select_one(black_box(&mut v), 0, n - 1, n / 2),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("select_one (near-extreme)", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| select_one(black_box(&mut v), 0, n - 1, n / 64),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable (reference)", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| v.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap()),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_adversarial_single_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("single-target select (sorted input)");
    group.sample_size(30);

    let n = 100_000usize;
    let ascending: Vec<i32> = (0..n as i32).collect();

    group.bench_function("select_one on ascending input", |b| {
        b.iter_batched(
            || ascending.clone(),
            |mut v| select_one(black_box(&mut v), 0, n - 1, n / 2),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_single_target, bench_adversarial_single_target);
criterion_main!(benches);
