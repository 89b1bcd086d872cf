use std::iter::repeat_with;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lomuto_qsort::qsort::{self, CAPACITY};
use rand::{thread_rng, Rng};

pub fn qsort_bench(c: &mut Criterion) {
    let mut rand = thread_rng();
    let xs: Vec<[i32; CAPACITY]> = repeat_with(|| rand.gen::<[i32; CAPACITY]>())
        .take(10_000)
        .collect();
    let descending: [i32; CAPACITY] = std::array::from_fn(|i| (CAPACITY - i) as i32);

    c.bench_function("lomuto qsort", |b| {
        b.iter_batched(
            || xs.clone(),
            |mut xs| {
                for arr in &mut xs {
                    qsort::qsort(arr);
                }
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("lomuto qsort descending", |b| {
        b.iter_batched(
            || descending,
            |mut arr| qsort::qsort(&mut arr),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("std qsort", |b| {
        b.iter_batched(
            || xs.clone(),
            |mut xs| {
                for arr in &mut xs {
                    arr.sort_unstable();
                }
            },
            BatchSize::SmallInput,
        );
    });
}
criterion_group!(benches, qsort_bench);
criterion_main!(benches);
