// ============================================================================
// Rational Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - validation plus reduction to lowest terms
// 2. Addition - cross-multiplication with i128 intermediates
// 3. Conversion - f64 and Decimal rendering
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_rational::Rational;

// ============================================================================
// Construction Benchmarks
// Reduction cost dominates; consecutive Fibonacci pairs maximize the number
// of Euclidean steps for their magnitude
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    let fibonacci_pairs: &[(i64, i64)] = &[
        (6_765, 10_946),
        (832_040, 1_346_269),
        (2_971_215_073, 4_807_526_976),
        (2_880_067_194_370_816_120, 4_660_046_610_375_530_309),
    ];

    for (numer, denom) in fibonacci_pairs {
        group.bench_with_input(
            BenchmarkId::new("fibonacci", denom),
            &(*numer, *denom),
            |b, &(numer, denom)| {
                b.iter(|| Rational::new(black_box(numer), black_box(denom)).unwrap())
            },
        );
    }

    // already-reduced input terminates the gcd immediately
    group.bench_function("already_reduced", |b| {
        b.iter(|| Rational::new(black_box(3), black_box(7)).unwrap())
    });

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    let half = Rational::new(1, 2).unwrap();
    let third = Rational::new(1, 3).unwrap();
    group.bench_function("small_operands", |b| {
        b.iter(|| black_box(half).checked_add(black_box(third)).unwrap())
    });

    // coprime denominators force a full reduction of the cross products
    let a = Rational::new(1, 999_999_937).unwrap();
    let b_op = Rational::new(1, 999_999_893).unwrap();
    group.bench_function("coprime_denominators", |b| {
        b.iter(|| black_box(a).checked_add(black_box(b_op)).unwrap())
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let value = Rational::new(355, 113).unwrap();
    group.bench_function("to_f64", |b| b.iter(|| black_box(value).to_f64()));
    group.bench_function("to_decimal", |b| b.iter(|| black_box(value).to_decimal()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_addition,
    benchmark_conversion
);
criterion_main!(benches);
