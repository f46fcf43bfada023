use banditlab::{
    Aggregator, SimConfig, Simulator, ValueEstimator,
    policies::{EpsilonGreedy, Policy, Random, Ucb},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use std::hint::black_box;

fn means(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for n_arms in [5, 50, 500].iter() {
        let mut est = ValueEstimator::new(*n_arms);
        for i in 0..(n_arms * 4) {
            est.update(i % n_arms, (i % 3) as f64 / 2.0);
        }

        group.bench_with_input(
            BenchmarkId::new("epsilon_greedy", n_arms),
            n_arms,
            |b, &n| {
                let policy = EpsilonGreedy::new(0.1);
                let mut rng = rand::rngs::StdRng::seed_from_u64(42);
                b.iter(|| black_box(policy.select(n * 4, &est, &mut rng)));
            },
        );

        group.bench_with_input(BenchmarkId::new("ucb", n_arms), n_arms, |b, &n| {
            let policy = Ucb::new();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(policy.select(n * 4, &est, &mut rng)));
        });

        group.bench_with_input(BenchmarkId::new("random", n_arms), n_arms, |b, &n| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(Random.select(n * 4, &est, &mut rng)));
        });
    }

    group.finish();
}

fn bench_single_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_run");

    for n_steps in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("epsilon_greedy", n_steps),
            n_steps,
            |b, &n| {
                let sim = Simulator::epsilon_greedy(means(5), 0.1).unwrap();
                let mut rng = rand::rngs::StdRng::seed_from_u64(42);
                b.iter(|| black_box(sim.run(n, &mut rng).unwrap()));
            },
        );

        group.bench_with_input(BenchmarkId::new("ucb", n_steps), n_steps, |b, &n| {
            let sim = Simulator::ucb(means(5)).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(sim.run(n, &mut rng).unwrap()));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let config = SimConfig {
        seed: Some(42),
        ..SimConfig::default()
    };
    let aggregator = Aggregator::new(&config).unwrap();

    c.bench_function("aggregate_ucb_50x1000", |b| {
        b.iter(|| black_box(aggregator.average(Ucb::new).unwrap()))
    });

    c.bench_function("aggregate_random_50x1000", |b| {
        b.iter(|| black_box(aggregator.average(|| Random).unwrap()))
    });
}

criterion_group!(benches, bench_selection, bench_single_run, bench_aggregate);
criterion_main!(benches);
