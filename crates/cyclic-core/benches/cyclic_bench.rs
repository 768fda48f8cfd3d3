//! Benchmarks for cyclic-core
//!
//! Measures performance of:
//! - Period search and block construction
//! - Sub-number enumeration
//! - Leading-digit index round-trips

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cyclic_core::{
    get_idx, list_sub_numbers, multiplicative_order, repair_by_idx_special, Base, CyclicNumber,
    SubNumbers,
};

/// Primes coprime to 10, from tiny to a six-digit period search
const PRIMES: [u64; 5] = [7, 97, 983, 9_811, 99_989];

/// Benchmark the bounded period search
fn bench_multiplicative_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplicative_order");

    for &p in &PRIMES {
        group.bench_with_input(BenchmarkId::from_parameter(p), &p, |b, &p| {
            b.iter(|| multiplicative_order(Base::DECIMAL, black_box(p)))
        });
    }
    group.finish();
}

/// Benchmark building the block, including the big-integer division
fn bench_cyclic_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_number");

    for &p in &PRIMES {
        group.bench_with_input(BenchmarkId::from_parameter(p), &p, |b, &p| {
            b.iter(|| CyclicNumber::new(black_box(p), Base::DECIMAL, 2))
        });
    }
    group.finish();
}

/// Benchmark enumeration of every window up to a maximum length
fn bench_list_sub_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_sub_numbers");
    let cyclic = CyclicNumber::unit(983, Base::DECIMAL).expect("983 has a period in base 10");

    for &max in &[1usize, 10, 50, 200] {
        let count = (max * cyclic.digits().len()) as u64;
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| list_sub_numbers(black_box(cyclic.digits()), 1, max))
        });
    }
    group.finish();
}

/// Benchmark lazy iteration without materializing values
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_number_iteration");
    let cyclic = CyclicNumber::unit(97, Base::DECIMAL).expect("97 has a period in base 10");

    for &max in &[10usize, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| {
                SubNumbers::new(black_box(cyclic.digits()), max, max)
                    .map(|it| it.count())
            })
        });
    }
    group.finish();
}

/// Benchmark index round-trip
fn bench_index_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_roundtrip");
    let cyclic = CyclicNumber::unit(9_811, Base::DECIMAL).expect("9811 has a period in base 10");
    let digits = cyclic.digits();

    for &size in &[1usize, 100, 1000] {
        let window = &digits.repeated_to(size)[..size];
        let value = cyclic_core::parse_digits(window, Base::DECIMAL).expect("window is decimal");
        group.bench_with_input(BenchmarkId::new("digits", size), &value, |b, v| {
            b.iter(|| {
                let idx = get_idx(digits, black_box(v)).expect("leading digit occurs");
                repair_by_idx_special(digits, idx)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_multiplicative_order,
    bench_cyclic_number,
    bench_list_sub_numbers,
    bench_iteration,
    bench_index_roundtrip,
);

criterion_main!(benches);
