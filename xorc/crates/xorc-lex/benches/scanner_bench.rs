//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package xorc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use xorc_lex::{tokenize, Scanner};

const PROGRAM: &str = r#"
import io;

struct Point {
    x: f64,
    y: f64,
}

fn fibonacci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    return fibonacci(n - 1) + fibonacci(n - 2);
}

/* entry point */
fn main() -> int {
    let mut total: i64 = 0;
    for i in 0..10 {
        total += fibonacci(i);   // accumulate
    }
    let p = Point { x: 1.5, y: -2.25 };
    let name = "xor\tlang\u{1F600}";
    let c = '\n';
    unsafe { let raw: unsafe_ptr = unsafe_cast(p as uvoid); }
    return total >> 1;
}
"#;

fn token_count(source: &str) -> usize {
    Scanner::new(source).count()
}

fn bench_scanner_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "fn main() -> int {\n    return 0;\n}";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("minimal_function", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("operators", |b| {
        b.iter(|| token_count(black_box("a <<= b >>= c && d || e -> f => g ... h :: i")))
    });

    group.finish();
}

fn bench_scanner_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_program");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("iterate", |b| b.iter(|| token_count(black_box(PROGRAM))));

    group.bench_function("tokenize_collect", |b| {
        b.iter(|| tokenize(black_box(PROGRAM)).map(|tokens| tokens.len()))
    });

    group.finish();
}

fn bench_scanner_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_large");

    let source = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program_x200", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_simple,
    bench_scanner_program,
    bench_scanner_large
);
criterion_main!(benches);
