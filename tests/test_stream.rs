/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use lzw_bitstream::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::File;

type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync + 'static>>;

#[test]
fn test_stream_matches_memory() -> Result<()> {
    let lzw = Lzw::default();
    let mut r = SmallRng::seed_from_u64(0);
    let data: Vec<u8> = (0..100000).map(|_| b'a' + r.random_range(0..4)).collect();

    let mut compressed = Vec::<u8>::new();
    let stats = lzw.compress_stream(data.as_slice(), &mut compressed)?;
    assert_eq!(compressed, lzw.compress_to_vec(&data)?);
    assert_eq!(stats.encoded_bytes, compressed.len() as u64);

    let mut expanded = Vec::<u8>::new();
    let expand_stats = lzw.expand_stream(compressed.as_slice(), &mut expanded)?;
    assert_eq!(expanded, data);
    assert_eq!(expand_stats, stats);
    Ok(())
}

#[test]
fn test_files() -> Result<()> {
    let dir = std::env::temp_dir();
    let input_path = dir.join("test_lzw_stream_input");
    let compressed_path = dir.join("test_lzw_stream_compressed");
    let output_path = dir.join("test_lzw_stream_output");

    let mut r = SmallRng::seed_from_u64(1);
    let data: Vec<u8> = (0..50000).map(|_| r.random_range(b'0'..=b'9')).collect();
    std::fs::write(&input_path, &data)?;

    let lzw = Lzw::new(LzwParams::new(14)?);
    lzw.compress_stream(File::open(&input_path)?, File::create(&compressed_path)?)?;
    lzw.expand_stream(File::open(&compressed_path)?, File::create(&output_path)?)?;
    assert_eq!(std::fs::read(&output_path)?, data);

    // a file compressed with another width does not expand to the same data
    let other = Lzw::new(LzwParams::new(13)?);
    let mut expanded = Vec::<u8>::new();
    if other
        .expand_stream(File::open(&compressed_path)?, &mut expanded)
        .is_ok()
    {
        assert_ne!(expanded, data);
    }

    for path in [input_path, compressed_path, output_path] {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[test]
fn test_stream_errors() -> Result<()> {
    let lzw = Lzw::default();
    let mut expanded = Vec::<u8>::new();
    match lzw.expand_stream(std::io::empty(), &mut expanded) {
        Err(LzwError::MissingEndMarker) => {}
        other => panic!("unexpected result {:?}", other),
    }
    // a single byte cannot hold a codeword
    match lzw.expand_stream(&[0x06_u8][..], &mut expanded) {
        Err(LzwError::Read(err)) => assert!(err.is_eof()),
        other => panic!("unexpected result {:?}", other),
    }
    Ok(())
}
