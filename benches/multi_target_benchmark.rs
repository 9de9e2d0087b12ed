use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use introselect::{select_many, select_one};
use rand::Rng;
use std::hint::black_box;

fn bench_many_vs_repeated_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi-target select");
    group.sample_size(20);

    let mut rng = rand::rng();
    let n = 100_000usize;
    let data: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0e9..1.0e9)).collect();
    let targets: Vec<usize> = (0..50).map(|i| i * (n / 50)).collect();

    group.bench_function("select_many (50 evenly spread targets)", |b| {
        b.iter_batched(
            || (data.clone(), targets.clone()),
            |(mut v, mut ks)| select_many(black_box(&mut v), 0, n - 1, black_box(&mut ks)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("select_one x50 (same targets, one at a time)", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| {
                for &k in &targets {
                    select_one(black_box(&mut v), 0, n - 1, k);
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_dense_target_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi-target select (dense targets)");
    group.sample_size(20);

    let mut rng = rand::rng();
    let n = 200_000usize;
    let data: Vec<i32> = (0..n as i32).map(|_| rng.random_range(i32::MIN..i32::MAX)).collect();
    let targets: Vec<usize> = (0..n).step_by(20).collect();

    group.bench_function("select_many (5% of the range as targets)", |b| {
        b.iter_batched(
            || (data.clone(), targets.clone()),
            |(mut v, mut ks)| select_many(black_box(&mut v), 0, n - 1, black_box(&mut ks)),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_many_vs_repeated_single, bench_dense_target_set);
criterion_main!(benches);
