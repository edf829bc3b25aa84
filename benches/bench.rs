use charconv::Notation;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

const INTS: &[&str] = &["0", "-69", "123406000", "7fffffff", "-9223372036854775808"];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn bench_notation(c: &mut Criterion, name: &str, notation: Notation, precision: Option<usize>) {
    let mut g = c.benchmark_group(name);

    let mut buf = [0u8; 400];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| charconv::format_float(&mut buf, black_box(num), notation, precision));
        });
    }
    g.finish();
}

fn charconv_scientific(c: &mut Criterion) {
    bench_notation(c, "charconv_scientific", Notation::Scientific, None);
}

fn charconv_general(c: &mut Criterion) {
    bench_notation(c, "charconv_general", Notation::General, None);
}

fn charconv_fixed(c: &mut Criterion) {
    bench_notation(c, "charconv_fixed", Notation::Fixed, None);
}

fn charconv_hex(c: &mut Criterion) {
    bench_notation(c, "charconv_hex", Notation::Hex, None);
}

fn charconv_precision(c: &mut Criterion) {
    bench_notation(c, "charconv_precision", Notation::General, Some(6));
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len() );
        });
    }
    g.finish();
}

fn std(c: &mut Criterion) {
    let mut g = c.benchmark_group("std");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{}", black_box(num)) );
        });
    }
    g.finish();
}

fn charconv_parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("charconv_parse");

    for text in INTS {
        let base = if text.contains('f') { 16 } else { 10 };
        g.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| {
                let mut value = 0i64;
                charconv::parse_integer(black_box(text.as_bytes()), &mut value, base);
                value
            });
        });
    }
    g.finish();
}

fn std_parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_parse");

    for text in INTS {
        let base = if text.contains('f') { 16 } else { 10 };
        g.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| i64::from_str_radix(black_box(text), base));
        });
    }
    g.finish();
}

criterion_group!(
    bench,
    charconv_general,
    charconv_scientific,
    charconv_fixed,
    charconv_hex,
    charconv_precision,
    ryu,
    std,
    charconv_parse,
    std_parse,
);

criterion_main!(bench);
