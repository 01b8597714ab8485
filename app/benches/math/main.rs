/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use softmath::{atan2nf, fabsf, powf, scalbnf, sqrtf};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::sqrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sqrtf(i as f32));
            }
        })
    });

    c.bench_function("system: sqrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::sqrt(black_box(i as f32)));
            }
        })
    });

    c.bench_function("softmath: sqrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sqrtf(black_box(i as f32)));
            }
        })
    });

    c.bench_function("libm::powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::powf(i as f32 / 10., 2.4));
            }
        })
    });

    c.bench_function("system: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::powf(black_box(i as f32 / 10.), 2.4));
            }
        })
    });

    c.bench_function("softmath: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf(black_box(i as f32 / 10.), 2.4));
            }
        })
    });

    c.bench_function("system: atan2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::atan2(black_box(i as f32 - 500.), 250.));
            }
        })
    });

    c.bench_function("softmath: atan2nf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(atan2nf(black_box(i as f32 - 500.), 250.));
            }
        })
    });

    c.bench_function("libm::scalbnf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::scalbnf(1.5, i - 500));
            }
        })
    });

    c.bench_function("softmath: scalbnf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(scalbnf(black_box(1.5), i - 500));
            }
        })
    });

    c.bench_function("softmath: fabsf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(fabsf(black_box(i as f32 - 500.)));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
