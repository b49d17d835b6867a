//! mdhash Criterion Benchmark
//!
//! Throughput of both variants against `sha2`, per-stage cost, and batch
//! scaling across threads.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdhash::Variant;
use rand::prelude::*;
use sha2::{Digest, Sha256, Sha512};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short messages (one to a few blocks).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for variant in Variant::ALL {
        for (size, name) in sizes {
            let input = random_input(size);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                BenchmarkId::new(variant.name(), name),
                &input,
                |b, data| b.iter(|| mdhash::hash(black_box(data), variant).unwrap()),
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: THROUGHPUT VS SHA2
// =============================================================================

/// Bulk throughput next to the RustCrypto implementation.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Throughput");
    group.sample_size(20);

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (4 * MB, "4MB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("mdhash-256", name), &input, |b, data| {
            b.iter(|| mdhash::hash(black_box(data), Variant::Sha256).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sha2-256", name), &input, |b, data| {
            b.iter(|| Sha256::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("mdhash-512", name), &input, |b, data| {
            b.iter(|| mdhash::hash(black_box(data), Variant::Sha512).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sha2-512", name), &input, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STAGES
// =============================================================================

/// Cost of each pipeline stage on its own, and of the traced path.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Stages");

    let input = random_input(4 * KB);

    for variant in Variant::ALL {
        let padded = mdhash::pad(&input, variant).unwrap();
        let blocks = mdhash::parse_blocks(&padded, variant).unwrap();
        let state = mdhash::initial_state(variant);

        group.bench_function(BenchmarkId::new("pad", variant.name()), |b| {
            b.iter(|| mdhash::pad(black_box(&input), variant).unwrap())
        });
        group.bench_function(BenchmarkId::new("expand-schedule", variant.name()), |b| {
            b.iter(|| mdhash::expand_schedule(black_box(&blocks[0]), variant).unwrap())
        });
        group.bench_function(BenchmarkId::new("compress-block", variant.name()), |b| {
            b.iter(|| mdhash::compress_block(black_box(&blocks[0]), &state, variant).unwrap())
        });
    }

    group.bench_function("trace/SHA-256", |b| {
        b.iter(|| mdhash::walkthrough::trace(black_box(&input), &mdhash::SHA256).unwrap())
    });
    group.bench_function("trace/SHA-512", |b| {
        b.iter(|| mdhash::walkthrough::trace(black_box(&input), &mdhash::SHA512).unwrap())
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCH THREAD SCALING
// =============================================================================

/// Batch hashing across 1 to N Rayon threads.
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Thread-Scaling");
    group.sample_size(20);

    let messages: Vec<Vec<u8>> = (0..256).map(|_| random_input(16 * KB)).collect();
    group.throughput(Throughput::Bytes((256 * 16 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| {
                    b.iter(|| mdhash::hash_batch(black_box(&messages), Variant::Sha256).unwrap())
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_throughput, bench_stages);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_thread_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
