//! Benchmarks for suffix array construction and LCP queries.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use suffix_index_core::{
    build_lcp_array, build_suffix_array_dc3, build_suffix_array_doubling, LcpQuerier,
};

/// Generate text with repeated structure (favourable for LCP reuse).
fn generate_repeated_pattern(size: usize, pattern_len: usize) -> Vec<u8> {
    let pattern: Vec<u8> = (b'a'..b'a' + pattern_len as u8).collect();
    pattern.into_iter().cycle().take(size).collect()
}

/// Generate random bytes over a bounded alphabet.
fn generate_random_bytes(size: usize, alphabet: u8) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0..alphabet)).collect()
}

/// All-equal text: the doubling builder's worst case.
fn generate_all_equal(size: usize) -> Vec<u8> {
    vec![b'a'; size]
}

fn bench_doubling(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_array_doubling");

    for size in [1_000, 10_000, 50_000, 100_000].iter() {
        let text = generate_repeated_pattern(*size, 5);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("repeated_pattern", size),
            &text,
            |b, text| {
                b.iter(|| build_suffix_array_doubling(black_box(text)));
            },
        );
    }

    for size in [1_000, 10_000, 50_000].iter() {
        let text = generate_random_bytes(*size, 64);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &text, |b, text| {
            b.iter(|| build_suffix_array_doubling(black_box(text)));
        });
    }

    for size in [1_000, 10_000, 50_000].iter() {
        let text = generate_all_equal(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("all_equal", size), &text, |b, text| {
            b.iter(|| build_suffix_array_doubling(black_box(text)));
        });
    }

    group.finish();
}

fn bench_dc3(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_array_dc3");

    for size in [1_000, 10_000, 50_000, 100_000, 200_000].iter() {
        let text = generate_repeated_pattern(*size, 5);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("repeated_pattern", size),
            &text,
            |b, text| {
                b.iter(|| build_suffix_array_dc3(black_box(text)));
            },
        );
    }

    for size in [1_000, 10_000, 50_000, 100_000].iter() {
        let text = generate_random_bytes(*size, 64);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &text, |b, text| {
            b.iter(|| build_suffix_array_dc3(black_box(text)));
        });
    }

    for size in [1_000, 10_000, 50_000, 100_000].iter() {
        let text = generate_all_equal(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("all_equal", size), &text, |b, text| {
            b.iter(|| build_suffix_array_dc3(black_box(text)));
        });
    }

    group.finish();
}

fn bench_lcp_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcp_array");

    for size in [10_000, 50_000, 100_000].iter() {
        let text = generate_random_bytes(*size, 16);
        let sa = build_suffix_array_dc3(&text);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), size, |b, _| {
            b.iter(|| build_lcp_array(black_box(&text), black_box(&sa)));
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcp_queries");

    for size in [10_000, 100_000].iter() {
        let text = generate_random_bytes(*size, 4);
        let querier = LcpQuerier::new(text.clone(), build_suffix_array_dc3(&text));

        let mut rng = rand::thread_rng();
        let pairs: Vec<(usize, usize)> = (0..1_000)
            .map(|_| (rng.gen_range(0..*size), rng.gen_range(0..*size)))
            .collect();

        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("random_pairs", size),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    let mut total = 0usize;
                    for &(i, j) in pairs {
                        total += querier.lcp(black_box(i), black_box(j));
                    }
                    total
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_doubling, bench_dc3, bench_lcp_array, bench_queries);
criterion_main!(benches);
