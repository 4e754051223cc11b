use criterion::{Criterion, criterion_group, criterion_main};
use levelog::{Level, LevelLogger};
use std::hint::black_box;
use std::io;

fn bench_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("Level::label");

    group.bench_function("named", |b| {
        b.iter(|| black_box(Level::INFO).label());
    });

    group.bench_function("clamped", |b| {
        b.iter(|| black_box(Level::new(42)).label());
    });

    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("LevelLogger::log");

    let mut plain = LevelLogger::builder()
        .prefix("bench")
        .without_timestamp()
        .writer(io::sink())
        .build();
    group.bench_function("no_timestamp", |b| {
        b.iter(|| plain.info(black_box("Application started successfully")));
    });

    let mut timed = LevelLogger::with_writer(Level::INFO, "bench", io::sink());
    group.bench_function("timestamp", |b| {
        b.iter(|| timed.info(black_box("Application started successfully")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| levelog::warning!(timed, "retry {} of {}", black_box(2), black_box(5)));
    });

    group.bench_function("filtered", |b| {
        b.iter(|| timed.debug(black_box("never written")));
    });

    group.finish();
}

criterion_group!(benches, bench_label, bench_log);
criterion_main!(benches);
