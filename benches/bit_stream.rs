/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{Criterion, criterion_group, criterion_main};
use lzw_bitstream::prelude::*;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const N: usize = 1 << 16;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let values: Vec<u32> = (0..N).map(|_| r.next_u32() & 0xFFF).collect();

    c.bench_function("write_bits<BE>(12)", |b| {
        b.iter(|| {
            let mut w = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::with_capacity(
                N * 2,
            )));
            for &value in &values {
                w.write_bits(black_box(value), 12).unwrap();
            }
            black_box(w.into_inner().unwrap().into_inner())
        })
    });

    c.bench_function("write_bits<LE>(12)", |b| {
        b.iter(|| {
            let mut w = <BitWriter<LE, _>>::new(MemByteWriterVec::new(Vec::<u8>::with_capacity(
                N * 2,
            )));
            for &value in &values {
                w.write_bits(black_box(value), 12).unwrap();
            }
            black_box(w.into_inner().unwrap().into_inner())
        })
    });

    let mut data = vec![0_u8; N * 2];
    r.fill_bytes(&mut data);

    c.bench_function("read_bits<BE>(12)", |b| {
        b.iter(|| {
            let mut rd = <BitReader<BE, _>>::new(MemByteReader::new(&data));
            while let Some(value) = rd.try_read_bits(12).unwrap_or(None) {
                black_box(value);
            }
        })
    });

    c.bench_function("read_bits<LE>(12)", |b| {
        b.iter(|| {
            let mut rd = <BitReader<LE, _>>::new(MemByteReader::new(&data));
            while let Some(value) = rd.try_read_bits(12).unwrap_or(None) {
                black_box(value);
            }
        })
    });

    c.bench_function("read_bit<BE>", |b| {
        b.iter(|| {
            let mut rd = <BitReader<BE, _>>::new(MemByteReader::new(&data));
            for _ in 0..N {
                black_box(rd.read_bit().unwrap());
            }
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
