use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gin_rummy::hand::Hand;
use gin_rummy::observer::NoopObserver;
use gin_rummy::scoring::Scorer;

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn bench_optimal_melds(c: &mut Criterion) {
    let scorer = Scorer::new().with_observer(NoopObserver);
    let scattered = hand("As 3d 5c 7h 9s Jd Kc 2h 4s 6d");
    let crowded = hand("5s 5d 5c 5h 4s 6s 4d 6d 4c 6c");

    let mut g = c.benchmark_group("optimal_melds");
    g.bench_with_input(BenchmarkId::new("no_melds", "scattered"), &scattered, |b, input| {
        b.iter(|| scorer.optimal_melds(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("overlapping", "4-5-6 block"), &crowded, |b, input| {
        b.iter(|| scorer.optimal_melds(black_box(input)))
    });
    g.finish();
}

fn bench_can_knock(c: &mut Criterion) {
    let scorer = Scorer::new().with_observer(NoopObserver);
    let eleven = hand("Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h");
    let mut g = c.benchmark_group("can_knock");
    g.bench_function("sequential", |b| b.iter(|| scorer.can_knock(black_box(&eleven))));
    g.bench_function("parallel", |b| b.iter(|| scorer.can_knock_parallel(black_box(&eleven))));
    g.finish();
}

fn bench_evaluate_knock(c: &mut Criterion) {
    let scorer = Scorer::new().with_observer(NoopObserver);
    let knocker = hand("Ks Kd Kc Qs Qd Qc 5h 6h 7h 9d");
    let opponent = hand("8h 9h Ah 2c 3c 4c 5d 6d 7d 4s");
    c.bench_function("evaluate_knock", |b| {
        b.iter(|| scorer.evaluate_knock(black_box(&knocker), black_box(&opponent)))
    });
}

criterion_group!(benches, bench_optimal_melds, bench_can_knock, bench_evaluate_knock);
criterion_main!(benches);
