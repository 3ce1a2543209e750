//! Parse and table-construction benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench parse_eval
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use truthtable_rs::parser::parse;
use truthtable_rs::table::build_table;

fn chain(n: usize, op: &str) -> String {
    (0..n).map(|i| format!("x{}", i)).collect::<Vec<_>>().join(op)
}

fn bench_parse(c: &mut Criterion) {
    let text = "(a && b || !c) ^ (d -> e) <-> !(f || g && !h)";
    c.bench_function("parse", |b| b.iter(|| parse(black_box(text)).unwrap()));
}

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");
    for n in [8, 12, 16] {
        let text = chain(n, " ^ ");
        let (expr, vars) = parse(&text).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| build_table(black_box(&expr), black_box(&vars)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_build_table);
criterion_main!(benches);
