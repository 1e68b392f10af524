//! # Digest Bloom Benchmarks
//!
//! Performance expectations:
//! - `add_hash` / `test_hash`: constant time (4-byte window + one bit)
//! - `bytes()` / `set_bytes()`: linear in the state byte length
//!
//! ```bash
//! cargo bench --package digest-bloom --bench filter_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest_bloom::{BloomFilter, NoHasher};
use rand::Rng;
use std::time::Duration;

/// Random 32-byte digests
fn generate_digests(count: usize) -> Vec<[u8; 32]> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

fn bench_add_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest-bloom/add");
    group.measurement_time(Duration::from_secs(5));

    let digests = generate_digests(10_000);
    group.throughput(Throughput::Elements(digests.len() as u64));

    for max_bits in [100_003usize, 10_000_019, 100_000_007] {
        group.bench_with_input(
            BenchmarkId::new("bulk_add_10000", max_bits),
            &max_bits,
            |b, &max_bits| {
                b.iter(|| {
                    let mut filter = BloomFilter::without_hasher(max_bits);
                    filter.add_hashes(black_box(&digests));
                    black_box(filter.bits_set())
                });
            },
        );
    }

    group.finish();
}

fn bench_test_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest-bloom/test");

    let added = generate_digests(10_000);
    let probes = generate_digests(10_000);
    let mut filter = BloomFilter::without_hasher(1_000_003);
    filter.add_hashes(&added);

    group.bench_function("test_existing", |b| {
        let target = &added[5_000];
        b.iter(|| black_box(filter.test_hash(black_box(target))))
    });

    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("bulk_test_10000_absent", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|probe| filter.test_hash(black_box(probe.as_slice())))
                .count()
        })
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest-bloom/serialization");

    for max_bits in [1_000_003usize, 100_000_007] {
        let mut filter = BloomFilter::without_hasher(max_bits);
        filter.add_hashes(generate_digests(50_000));
        let state = filter.bytes();
        group.throughput(Throughput::Bytes(state.len() as u64));

        group.bench_with_input(BenchmarkId::new("export", max_bits), &filter, |b, filter| {
            b.iter(|| black_box(filter.bytes()))
        });

        group.bench_with_input(BenchmarkId::new("import", max_bits), &state, |b, state| {
            b.iter(|| black_box(BloomFilter::<NoHasher>::new_from_bytes(max_bits, None, state)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_hash, bench_test_hash, bench_serialization);
criterion_main!(benches);
