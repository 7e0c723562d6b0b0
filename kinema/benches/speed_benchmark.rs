use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kinema::{calculate_speed, Meters, MetersPerSecond, Seconds};
use std::hint::black_box;

const SAMPLES: usize = 100_000;

fn samples() -> (Vec<f64>, Vec<f64>) {
    let distances = (0..SAMPLES).map(|i| 1.0 + (i % 997) as f64).collect();
    let durations = (0..SAMPLES).map(|i| 0.5 + (i % 89) as f64 / 3600.0).collect();
    (distances, durations)
}

fn bench_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("speed");
    let (distances, durations) = samples();

    group.bench_with_input(
        BenchmarkId::new("bare_f64", SAMPLES),
        &(&distances, &durations),
        |b, (d, t)| {
            b.iter(|| {
                d.iter()
                    .zip(t.iter())
                    .map(|(d, t)| black_box(d / t))
                    .sum::<f64>()
            });
        },
    );

    let distances: Vec<Meters> = distances.into_iter().map(Meters::new).collect();
    let durations: Vec<Seconds> = durations.into_iter().map(Seconds::new).collect();

    group.bench_with_input(
        BenchmarkId::new("typed", SAMPLES),
        &(&distances, &durations),
        |b, (d, t)| {
            b.iter(|| {
                d.iter()
                    .zip(t.iter())
                    .map(|(&d, &t)| black_box(calculate_speed(d, t)))
                    .sum::<MetersPerSecond>()
            });
        },
    );

    group.finish();
}

criterion_group!(benches, bench_speed);
criterion_main!(benches);
