// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - String inputs of varying shape
// 2. Arithmetic - Aligned vs misaligned scales, multiplication, division
// 3. Rendering - Plain vs grouped fixed-width output
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use money_decimal::{Decimal, DecimalFormat, FormatOptions};

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["42", "1652238.8", "-123456.789012"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(Decimal::parse_with(*input, DecimalFormat::default())));
        });
    }

    let grouped = DecimalFormat::new()
        .with_thousands_separator(".")
        .with_decimal_separator(",");
    group.bench_function("grouped_european", |b| {
        b.iter(|| black_box(Decimal::parse_with("600.822.115,84", grouped.clone())));
    });

    group.finish();
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Decimal::parse_with("12345.678", DecimalFormat::default()).unwrap();
    let aligned = Decimal::parse_with("987.654", DecimalFormat::default()).unwrap();
    let misaligned = Decimal::parse_with("0.00012345", DecimalFormat::default()).unwrap();

    group.bench_function("add_aligned", |b| b.iter(|| black_box(a.add(&aligned))));
    group.bench_function("add_misaligned", |b| {
        b.iter(|| black_box(a.add(&misaligned)))
    });
    group.bench_function("mul", |b| b.iter(|| black_box(a.mul(&aligned))));
    group.bench_function("div", |b| {
        b.iter(|| black_box(a.checked_div(&aligned).unwrap()))
    });

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let value = Decimal::parse_with("1652238.875", DecimalFormat::default()).unwrap();
    let options = FormatOptions::new()
        .thousands_separator(",")
        .decimal_places(2);

    group.bench_function("plain", |b| b.iter(|| black_box(value.to_string())));
    group.bench_function("grouped_fixed", |b| {
        b.iter(|| black_box(value.format_with(&options)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_rendering
);
criterion_main!(benches);
