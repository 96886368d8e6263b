/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    width: u8,
    little_endian: bool,
    data: Vec<u8>,
}

/// Compress and expand arbitrary data with an arbitrary width and
/// endianness, and feed the raw data to the expander, which must fail
/// cleanly or produce output without panicking.
pub fn harness(case: FuzzCase) {
    let width = LzwParams::MIN_WIDTH
        + case.width as usize % (LzwParams::MAX_WIDTH - LzwParams::MIN_WIDTH + 1);
    let lzw = Lzw::new(LzwParams::new(width).unwrap());
    if case.little_endian {
        round_trip::<LE>(&lzw, &case.data);
        let _ = expand::<LE>(&lzw, &case.data);
    } else {
        round_trip::<BE>(&lzw, &case.data);
        let _ = expand::<BE>(&lzw, &case.data);
    }
}

fn round_trip<E: Endianness>(lzw: &Lzw, data: &[u8]) {
    let mut reader = <BitReader<E, _>>::new(MemByteReader::new(data));
    let mut writer = <BitWriter<E, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
    let stats = lzw.compress(&mut reader, &mut writer).unwrap();
    let compressed = writer.into_inner().unwrap().into_inner();
    assert_eq!(stats.encoded_bytes, compressed.len() as u64);

    let (expanded, expand_stats) = expand::<E>(lzw, &compressed).unwrap();
    assert_eq!(expanded, data);
    assert_eq!(expand_stats, stats);
}

fn expand<E: Endianness>(lzw: &Lzw, data: &[u8]) -> Result<(Vec<u8>, LzwStats), MemLzwError> {
    let mut reader = <BitReader<E, _>>::new(MemByteReader::new(data));
    let mut writer = <BitWriter<E, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
    let stats = lzw.expand(&mut reader, &mut writer)?;
    Ok((writer.into_inner().map_err(LzwError::Write)?.into_inner(), stats))
}
