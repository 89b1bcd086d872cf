use std::iter::repeat_with;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lomuto_qsort::num_parse;
use rand::{thread_rng, Rng};

pub fn num_parse_bench(c: &mut Criterion) {
    let mut rand = thread_rng();

    let mut group = c.benchmark_group("num parse");

    let xs: Vec<String> = repeat_with(|| rand.gen::<i32>())
        .map(|n| n.to_string())
        .take(1_000_000)
        .collect();

    group.bench_function("parse_i32", |b| {
        b.iter(|| {
            for s in &xs {
                let num = num_parse::parse_i32(s);
                black_box(num);
            }
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            for s in &xs {
                let num = s.parse::<i32>();
                _ = black_box(num);
            }
        });
    });

    group.finish();
}
criterion_group!(benches, num_parse_bench);
criterion_main!(benches);
