//! Statistics engine benchmarks
//!
//! Batch compute over the preset run sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wf_sim::{SimulationRunner, SimulationSize, SpinGenerator, SpinSequence};
use wf_stats::{StatisticsAccumulator, compute_statistics};

const SIZES: &[SimulationSize] = &[
    SimulationSize::Spins10K,
    SimulationSize::Spins150K,
    SimulationSize::Spins1M,
];

fn seeded_sequence(size: usize) -> SpinSequence {
    SimulationRunner::with_generator(SpinGenerator::seeded(0x5EED))
        .run(size)
        .expect("seeded run")
}

// ═══════════════════════════════════════════════════════════════════════════════
// BATCH
// ═══════════════════════════════════════════════════════════════════════════════

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_statistics");

    for &preset in SIZES {
        let spins = seeded_sequence(preset.as_usize());
        group.throughput(Throughput::Elements(spins.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(preset), &spins, |b, spins| {
            b.iter(|| compute_statistics(black_box(spins)).expect("non-empty"))
        });
    }

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════════
// INCREMENTAL
// ═══════════════════════════════════════════════════════════════════════════════

fn bench_snapshot(c: &mut Criterion) {
    let spins = seeded_sequence(SimulationSize::Spins150K.as_usize());
    let mut acc = StatisticsAccumulator::new();
    acc.extend(&spins);

    c.bench_function("accumulator_snapshot_150K", |b| {
        b.iter(|| black_box(&acc).snapshot().expect("non-empty"))
    });
}

criterion_group!(benches, bench_compute, bench_snapshot);
criterion_main!(benches);
