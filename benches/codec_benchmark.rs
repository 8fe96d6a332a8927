// ============================================================================
// Decimal Literal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arbitrary Precision - encode() over BigInt unscaled values
// 2. Native Fast Path - encode_i128() for values from rust_decimal
// 3. Literal Construction - parse + encode through DecimalLiteral
// 4. Decoding - the mirror direction
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_literal::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn sample_values() -> Vec<(&'static str, BigInt)> {
    vec![
        ("zero", BigInt::from(0)),
        ("small", BigInt::from(12345)),
        ("i64_max", BigInt::from(i64::MAX)),
        ("38_digits", BigInt::from(10u8).pow(38) - 1u32),
        ("negative_38_digits", -(BigInt::from(10u8).pow(38) - 1u32)),
    ]
}

// ============================================================================
// Arbitrary Precision Encoding
// ============================================================================

fn benchmark_encode_bigint(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_bigint");

    for (name, value) in sample_values() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| black_box(encode(black_box(value), DEFAULT_BYTE_WIDTH)))
        });
    }

    group.finish();
}

// ============================================================================
// Native Fast Path
// ============================================================================

fn benchmark_encode_i128(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_i128");

    for (name, value) in [
        ("zero", 0i128),
        ("small", 12345),
        ("i128_max", i128::MAX),
        ("i128_min", i128::MIN),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, &value| {
            b.iter(|| black_box(encode_i128(black_box(value), DEFAULT_BYTE_WIDTH)))
        });
    }

    group.finish();
}

// ============================================================================
// Literal Construction
// ============================================================================

fn benchmark_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_literal");
    let config = CodecConfig::default();

    group.bench_function("parse_and_encode", |b| {
        b.iter(|| {
            let value: DecimalValue = black_box("-98765.4321").parse().unwrap();
            black_box(DecimalLiteral::encode(&value, &config))
        })
    });

    let d = Decimal::new(-987654321, 4);
    group.bench_function("from_rust_decimal", |b| {
        b.iter(|| black_box(DecimalLiteral::from_rust_decimal(black_box(d), &config)))
    });

    group.bench_function("via_decimal_value", |b| {
        b.iter(|| {
            let value = DecimalValue::from(black_box(d));
            black_box(DecimalLiteral::encode(&value, &config))
        })
    });

    group.finish();
}

// ============================================================================
// Decoding
// ============================================================================

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for width in [4usize, 16, 32] {
        let bytes = encode(&BigInt::from(-12345), width).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(width), &bytes, |b, bytes| {
            b.iter(|| black_box(decode(black_box(bytes))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_bigint,
    benchmark_encode_i128,
    benchmark_literal,
    benchmark_decode
);
criterion_main!(benches);
