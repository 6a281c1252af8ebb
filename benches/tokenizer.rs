//! Tokenizer benchmarks.
//!
//! Measures single-value scan throughput per token kind and across growing
//! digit runs, since numeric text is preserved verbatim at any length.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jsonlex::Tokenizer;
use std::hint::black_box;

/// Representative single-value inputs, one per token kind.
const INPUTS: &[(&str, &[u8])] = &[
    ("null", b"null"),
    ("bool", b"false"),
    ("int", b"-9223372036854775809"),
    ("float", b"-3.141592653589793238462643383279502884197169e-10"),
    ("string", br#""The quick brown fox jumps over the lazy dog""#),
    ("escapes", br#""a\"b\\c\/d\be\ff\ng\rh\ti\u00e9""#),
    ("time", br#""2015-05-14T12:34:56.379+02:00""#),
];

fn bench_token_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer/kinds");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| {
                let mut tk = Tokenizer::from_reader(black_box(&input[..]));
                black_box(tk.next_token().unwrap());
            });
        });
    }
    group.finish();
}

fn bench_digit_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer/digit_runs");
    for size in &[10usize, 100, 1_000, 10_000] {
        let digits: String = "1234567890".chars().cycle().take(*size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &digits, |b, digits| {
            b.iter(|| {
                let mut tk = Tokenizer::from_reader(black_box(digits.as_bytes()));
                black_box(tk.next_token().unwrap());
            });
        });
    }
    group.finish();
}

fn bench_padded_string(c: &mut Criterion) {
    let padded = format!("{}\"payload\"{}", " ".repeat(4096), "\n".repeat(4096));

    c.bench_function("tokenizer/whitespace_padding", |b| {
        b.iter(|| {
            let mut tk = Tokenizer::from_reader(black_box(padded.as_bytes()));
            black_box(tk.next_token().unwrap());
        });
    });
}

criterion_group!(benches, bench_token_kinds, bench_digit_runs, bench_padded_string);
criterion_main!(benches);
