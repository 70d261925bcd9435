use tokengen::token::{Alphabet, generate, generate_with};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_default_token(c: &mut Criterion) {
    c.bench_function("token 44 symbols alphanumeric", |b| {
        b.iter(|| generate().unwrap())
    });
}

pub fn bench_hex_token(c: &mut Criterion) {
    let alphabet = Alphabet::hex();

    c.bench_function("token 64 symbols hex", |b| {
        b.iter(|| generate_with(black_box(64), &alphabet).unwrap())
    });
}

criterion_group!(benches, bench_default_token, bench_hex_token);
criterion_main!(benches);
