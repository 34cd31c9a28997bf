//! Criterion benchmarks for the simulation driver on the bench profiles.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use thermocube_bench::{reference_profile, stress_profile};
use thermocube_engine::Simulation;

fn bench_step_32(c: &mut Criterion) {
    let mut sim = Simulation::new(reference_profile()).unwrap();

    // Warm up: first step allocates the second buffer
    sim.step().unwrap();

    c.bench_function("step_32", |b| {
        b.iter(|| {
            let metrics = sim.step().unwrap();
            black_box(metrics);
        });
    });
}

fn bench_step_128(c: &mut Criterion) {
    let mut sim = Simulation::new(stress_profile()).unwrap();
    sim.step().unwrap();

    c.bench_function("step_128", |b| {
        b.iter(|| {
            let metrics = sim.step().unwrap();
            black_box(metrics);
        });
    });
}

fn bench_1000_steps_32(c: &mut Criterion) {
    c.bench_function("1000_steps_32", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile()).unwrap();
            for _ in 0..1000 {
                black_box(sim.step().unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_step_32, bench_step_128, bench_1000_steps_32);
criterion_main!(benches);
