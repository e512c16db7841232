//! Training benchmarks: fit over synthetic event feature sets of varying size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use triage_core::FeatureVector;
use triage_training::Trainer;

fn synthetic_set(samples: usize) -> (Vec<FeatureVector>, Vec<f64>) {
    let mut features = Vec::with_capacity(samples);
    let mut labels = Vec::with_capacity(samples);
    for i in 0..samples {
        let important = i % 3 != 0;
        let frac = i as f64 / samples as f64;
        features.push(FeatureVector::new([
            if important && i % 2 == 0 { 1.0 } else { 0.0 },
            if important { 1.0 } else { 0.0 },
            if important { 0.0 } else { 1.0 },
            if important { 1.0 / (1.0 + frac * 60.0) } else { 0.0 },
            frac,
        ]));
        labels.push(if important { 1.0 } else { 0.0 });
    }
    (features, labels)
}

fn bench_fit(c: &mut Criterion) {
    let trainer = Trainer::default();
    let mut group = c.benchmark_group("fit");
    for samples in [50, 500, 5000] {
        let (features, labels) = synthetic_set(samples);
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, _| {
            b.iter(|| trainer.fit(&features, &labels).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
