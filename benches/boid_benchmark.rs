/*
 * Boid Simulation Benchmark
 *
 * This file contains benchmarks for the boid simulation to identify performance bottlenecks.
 * It measures the interaction pass (sequential and parallel), the integration pass
 * and a full tick over several flock sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use flock3d::physics::{accumulate_forces, integrate, step};
use flock3d::vector::Vec3;
use flock3d::{Boid, Flock, SimulationParams};

const FLOCK_SIZES: [usize; 4] = [100, 250, 500, 1000];

// Random positions and velocities inside the default bounding cube
fn random_flock(n: usize, params: &SimulationParams) -> Flock {
    let mut rng = StdRng::seed_from_u64(42);
    let edge = params.edge;

    let boids = (0..n)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-edge..edge),
                rng.gen_range(-edge..edge),
                rng.gen_range(-edge..edge),
            );
            let velocity = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            Boid::new(position).with_velocity(velocity)
        })
        .collect();

    Flock::from_boids(boids)
}

// Benchmark the interaction pass, sequential and parallel
fn bench_interaction_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction_pass");

    for parallel in [false, true] {
        let params = SimulationParams {
            enable_parallel: parallel,
            ..SimulationParams::default()
        };
        let label = if parallel { "parallel" } else { "sequential" };

        for &n in FLOCK_SIZES.iter() {
            let flock = random_flock(n, &params);

            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, _| {
                b.iter(|| {
                    let mut flock = flock.clone();
                    accumulate_forces(&mut flock, &params);
                    black_box(flock);
                });
            });
        }
    }

    group.finish();
}

// Benchmark the integration pass
fn bench_integration_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration_pass");
    let params = SimulationParams::default();

    for &n in FLOCK_SIZES.iter() {
        let mut flock = random_flock(n, &params);
        accumulate_forces(&mut flock, &params);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut flock = flock.clone();
                integrate(&mut flock, &params, params.delta_t);
                black_box(flock);
            });
        });
    }

    group.finish();
}

// Benchmark a full tick
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let params = SimulationParams::default();

    for &n in FLOCK_SIZES.iter() {
        let mut flock = random_flock(n, &params);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| step(&mut flock, &params, params.delta_t));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_interaction_pass, bench_integration_pass, bench_tick
}
criterion_main!(benches);
