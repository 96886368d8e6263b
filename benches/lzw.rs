/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzw_bitstream::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const LEN: usize = 1 << 20;

fn text(r: &mut SmallRng) -> Vec<u8> {
    const WORDS: [&[u8]; 8] = [
        b"lorem ", b"ipsum ", b"dolor ", b"sit ", b"amet ", b"consectetur ", b"adipiscing ",
        b"elit\n",
    ];
    let mut data = Vec::with_capacity(LEN + 16);
    while data.len() < LEN {
        data.extend_from_slice(WORDS[r.random_range(0..WORDS.len())]);
    }
    data.truncate(LEN);
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let mut random = vec![0_u8; LEN];
    r.fill(&mut random[..]);
    let inputs = [("text", text(&mut r)), ("random", random)];

    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(LEN as u64));
    for width in [9, 12, 16] {
        let lzw = Lzw::new(LzwParams::new(width).unwrap());
        for (name, data) in &inputs {
            group.bench_with_input(BenchmarkId::new(*name, width), data, |b, data| {
                b.iter(|| black_box(lzw.compress_to_vec(black_box(data)).unwrap()))
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("expand");
    group.throughput(Throughput::Bytes(LEN as u64));
    for width in [9, 12, 16] {
        let lzw = Lzw::new(LzwParams::new(width).unwrap());
        for (name, data) in &inputs {
            let compressed = lzw.compress_to_vec(data).unwrap();
            group.bench_with_input(BenchmarkId::new(*name, width), &compressed, |b, data| {
                b.iter(|| black_box(lzw.expand_from_slice(black_box(data)).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
