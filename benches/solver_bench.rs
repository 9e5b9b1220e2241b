//! Criterion benchmarks for the knapsack solvers.
//!
//! Uses synthetic random instances to measure solver overhead across
//! instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mkp_heur::greedy::{GreedyAdd, GreedyRemove};
use mkp_heur::hillclimb::{ClimbConfig, HillClimb};
use mkp_heur::problem::{Instance, Item};
use mkp_heur::scoring::{MaxRatio, SumRatio};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random instance with roughly half of the aggregate cost affordable.
fn synthetic_instance(num_items: usize, dimension: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);

    let items: Vec<Item> = (0..num_items)
        .map(|_| {
            let utility = rng.random_range(1..100);
            let costs = (0..dimension).map(|_| rng.random_range(1..50)).collect();
            Item::new(utility, costs)
        })
        .collect();

    let budgets = (0..dimension)
        .map(|d| {
            let total: u64 = items.iter().map(|item| u64::from(item.costs()[d])).sum();
            (total / 2) as u32
        })
        .collect();

    Instance::new(dimension, budgets, items).unwrap()
}

fn bench_greedy_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_add");

    for &(n, k) in &[(50usize, 2usize), (200, 5), (500, 10)] {
        let instance = synthetic_instance(n, k, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_k{}", n, k), n),
            &instance,
            |b, instance| {
                b.iter(|| {
                    let selection = GreedyAdd::run(black_box(instance), &SumRatio);
                    black_box(selection)
                })
            },
        );
    }
    group.finish();
}

fn bench_greedy_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_remove");

    for &(n, k) in &[(50usize, 2usize), (200, 5)] {
        let instance = synthetic_instance(n, k, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_k{}", n, k), n),
            &instance,
            |b, instance| {
                b.iter(|| {
                    let selection =
                        GreedyRemove::run(black_box(instance), &SumRatio, &MaxRatio);
                    black_box(selection)
                })
            },
        );
    }
    group.finish();
}

fn bench_hillclimb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hillclimb");
    group.sample_size(10);

    for &n in &[20usize, 50] {
        let instance = synthetic_instance(n, 3, 42);
        let start = GreedyAdd::run(&instance, &SumRatio);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, start),
            |b, (instance, start)| {
                b.iter(|| {
                    let result =
                        HillClimb::run(black_box(instance), start, &ClimbConfig::default())
                            .unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_hillclimb_randomized(c: &mut Criterion) {
    let mut group = c.benchmark_group("hillclimb_randomized");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let instance = synthetic_instance(n, 3, 42);
        let start = GreedyAdd::run(&instance, &SumRatio);
        let config = ClimbConfig::default()
            .with_radius(3)
            .with_samples(128)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, start, config),
            |b, (instance, start, config)| {
                b.iter(|| {
                    let result =
                        HillClimb::run_randomized(black_box(instance), start, config).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_greedy_add,
    bench_greedy_remove,
    bench_hillclimb,
    bench_hillclimb_randomized
);
criterion_main!(benches);
