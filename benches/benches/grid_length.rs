// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_grid_length`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use understory_grid_length::{
    GridLength, is_valid_grid_length, is_valid_track_list, parse_grid_length, parse_track_list,
};

const SAMPLES: [&str; 8] = ["*", "2.5*", "auto", "!", "42.9", "20.5px", "2.54cm", "20.5kg"];

fn bench_single_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_length/single");
    group.throughput(Throughput::Elements(SAMPLES.len() as u64));

    group.bench_function("is_valid_grid_length", |b| {
        b.iter(|| {
            for text in SAMPLES {
                black_box(is_valid_grid_length(black_box(text)));
            }
        });
    });

    group.bench_function("parse_grid_length", |b| {
        b.iter(|| {
            for text in SAMPLES {
                let _ = black_box(parse_grid_length(black_box(text)));
            }
        });
    });

    group.bench_function("from_str", |b| {
        b.iter(|| {
            for text in SAMPLES {
                let _ = black_box(black_box(text).parse::<GridLength>());
            }
        });
    });

    group.finish();
}

fn bench_track_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_length/track_list");

    // Lists past four entries spill out of the inline storage.
    for len in [3_usize, 4, 16, 128] {
        let text = SAMPLES[..7]
            .iter()
            .cycle()
            .take(len)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("parse", len), &text, |b, text| {
            b.iter(|| black_box(parse_track_list(black_box(text))));
        });

        group.bench_with_input(BenchmarkId::new("validate", len), &text, |b, text| {
            b.iter(|| black_box(is_valid_track_list(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_values, bench_track_lists);
criterion_main!(benches);
