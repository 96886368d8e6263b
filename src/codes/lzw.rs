/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The LZW compressor and expander.

use core::convert::Infallible;
use core::error::Error;
use std::io::{BufReader, BufWriter, Read, Write};

use super::code_table::CodeTable;
use super::params::{ALPHABET_SIZE, END_OF_MESSAGE, FIRST_CODE, LzwParams};
use super::prefix_trie::PrefixTrie;
use crate::impls::*;
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use tracing::{debug, trace};

/// The error returned by [`Lzw::compress`] and [`Lzw::expand`].
///
/// Besides errors of the input (`RE`) and output (`WE`) bit streams, it
/// reports streams that cannot have been produced by the compressor.
#[derive(Debug, thiserror::Error)]
pub enum LzwError<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> {
    #[error("Read error: {0}")]
    Read(#[source] RE),
    #[error("Write error: {0}")]
    Write(#[source] WE),
    /// A codeword that is neither assigned nor the next code to be assigned.
    #[error("Invalid codeword {code}: the next code to be assigned is {next_code}")]
    InvalidCode { code: u32, next_code: u32 },
    /// The input ended at a codeword boundary before the end-of-message code.
    #[error("The stream ended without an end-of-message codeword")]
    MissingEndMarker,
    /// A prefix of the input has no code, which means that the dictionary
    /// is corrupted.
    #[error("No dictionary entry for a prefix of length {len}")]
    NotFound { len: usize },
}

/// The error of the in-memory methods [`Lzw::compress_to_vec`] and
/// [`Lzw::expand_from_slice`].
pub type MemLzwError = LzwError<BitError<Infallible>, BitError<Infallible>>;

/// The error of the stream methods [`Lzw::compress_stream`] and
/// [`Lzw::expand_stream`].
pub type IoLzwError = LzwError<BitError<std::io::Error>, BitError<std::io::Error>>;

/// Statistics about a run of [`Lzw::compress`] or [`Lzw::expand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LzwStats {
    /// The number of codewords, including the end-of-message code.
    pub codewords: u64,
    /// The number of uncompressed bytes.
    pub decoded_bytes: u64,
    /// The number of compressed bytes, including the final padding.
    pub encoded_bytes: u64,
    /// The number of codes assigned after the byte values and the
    /// end-of-message code.
    pub learned: u32,
    /// Whether the dictionary reached its capacity, after which no more codes
    /// are assigned.
    pub frozen: bool,
}

/// A fixed-width LZW codec.
///
/// Each call to [`compress`](Lzw::compress) or [`expand`](Lzw::expand)
/// builds its own dictionary, so a codec can be used any number of times.
/// See the [module documentation](crate::codes) for the stream format.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let lzw = Lzw::default();
/// let compressed = lzw.compress_to_vec(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
/// assert_eq!(lzw.expand_from_slice(&compressed).unwrap(), b"TOBEORNOTTOBEORTOBEORNOT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lzw {
    params: LzwParams,
}

impl Lzw {
    #[must_use]
    pub const fn new(params: LzwParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> LzwParams {
        self.params
    }

    /// The number of compressed bytes for the given number of codewords.
    fn encoded_bytes(&self, codewords: u64) -> u64 {
        (codewords * self.params.width() as u64).div_ceil(8)
    }

    /// A trie containing all single-byte strings.
    fn seeded_trie(&self) -> PrefixTrie {
        // every assigned code adds exactly one node
        let mut trie = PrefixTrie::with_capacity(self.params.capacity() as usize + 1);
        for byte in 0..ALPHABET_SIZE {
            trie.insert(&[byte as u8], byte);
        }
        trie
    }

    /// Compress the whole content of `input` to `output`, which is flushed.
    ///
    /// The input is read completely before compression starts; it must be
    /// made of whole bytes.
    pub fn compress<E: Endianness, R: BitRead<E>, W: BitWrite<E>>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<LzwStats, LzwError<R::Error, W::Error>> {
        let width = self.params.width();
        let capacity = self.params.capacity();
        let mut trie = self.seeded_trie();
        let mut next_code = FIRST_CODE;

        let data = input.read_to_end().map_err(LzwError::Read)?;
        debug!(order = E::NAME, width, len = data.len(), "compressing");
        let mut stats = LzwStats {
            decoded_bytes: data.len() as u64,
            ..Default::default()
        };

        let mut rest = data.as_slice();
        while !rest.is_empty() {
            let prefix = trie.longest_prefix_of(rest);
            let len = prefix.len();
            let code = trie.get(prefix).ok_or(LzwError::NotFound { len })?;
            output.write_bits(code, width).map_err(LzwError::Write)?;
            stats.codewords += 1;
            trace!(code, len, "codeword");

            if len < rest.len() && next_code < capacity {
                trie.insert(&rest[..=len], next_code);
                next_code += 1;
                if next_code == capacity {
                    debug!(codewords = stats.codewords, "dictionary full");
                    stats.frozen = true;
                }
            }
            rest = &rest[len..];
        }

        output
            .write_bits(END_OF_MESSAGE, width)
            .map_err(LzwError::Write)?;
        output.flush().map_err(LzwError::Write)?;
        stats.codewords += 1;
        stats.learned = next_code - FIRST_CODE;
        stats.encoded_bytes = self.encoded_bytes(stats.codewords);
        debug!(?stats, "compressed");
        Ok(stats)
    }

    /// Expand the content of `input` up to the end-of-message code to
    /// `output`, which is flushed.
    ///
    /// Bits after the end-of-message code are not read.
    pub fn expand<E: Endianness, R: BitRead<E>, W: BitWrite<E>>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<LzwStats, LzwError<R::Error, W::Error>> {
        let width = self.params.width();
        let mut table = CodeTable::new(self.params);
        let mut stats = LzwStats::default();
        debug!(order = E::NAME, width, "expanding");

        let first = next_codeword(input, width, &mut stats)?;
        if first != END_OF_MESSAGE {
            let mut previous = table
                .get(first)
                .ok_or(LzwError::InvalidCode {
                    code: first,
                    next_code: table.next_code(),
                })?
                .to_vec();
            output.write_bytes(&previous).map_err(LzwError::Write)?;
            stats.decoded_bytes += previous.len() as u64;

            loop {
                let code = next_codeword(input, width, &mut stats)?;
                if code == END_OF_MESSAGE {
                    break;
                }
                let current = match table.get(code) {
                    Some(entry) => entry.to_vec(),
                    // the compressor used the code it had just assigned
                    None if code == table.next_code() && !table.is_full() => {
                        let mut entry = previous.clone();
                        entry.push(previous[0]);
                        entry
                    }
                    None => {
                        return Err(LzwError::InvalidCode {
                            code,
                            next_code: table.next_code(),
                        });
                    }
                };

                if !table.is_full() {
                    let mut entry = core::mem::take(&mut previous);
                    entry.push(current[0]);
                    table.push(entry);
                    if table.is_full() {
                        debug!(codewords = stats.codewords, "dictionary full");
                        stats.frozen = true;
                    }
                }

                output.write_bytes(&current).map_err(LzwError::Write)?;
                stats.decoded_bytes += current.len() as u64;
                previous = current;
            }
        }

        output.flush().map_err(LzwError::Write)?;
        stats.learned = table.learned();
        stats.encoded_bytes = self.encoded_bytes(stats.codewords);
        debug!(?stats, "expanded");
        Ok(stats)
    }

    /// Compress a slice into a big-endian stream.
    pub fn compress_to_vec(&self, data: &[u8]) -> Result<Vec<u8>, MemLzwError> {
        let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(data));
        let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        self.compress(&mut reader, &mut writer)?;
        Ok(writer.into_inner().map_err(LzwError::Write)?.into_inner())
    }

    /// Expand a big-endian stream held in a slice.
    pub fn expand_from_slice(&self, data: &[u8]) -> Result<Vec<u8>, MemLzwError> {
        let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(data));
        let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        self.expand(&mut reader, &mut writer)?;
        Ok(writer.into_inner().map_err(LzwError::Write)?.into_inner())
    }

    /// Compress a [`Read`] into a big-endian stream written to a [`Write`].
    ///
    /// Both are buffered internally.
    pub fn compress_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<LzwStats, IoLzwError> {
        let mut reader = <BitReader<BE, _>>::new(ByteAdapter::new(BufReader::new(input)));
        let mut writer = <BitWriter<BE, _>>::new(ByteAdapter::new(BufWriter::new(output)));
        let stats = self.compress(&mut reader, &mut writer)?;
        writer.close().map_err(LzwError::Write)?;
        Ok(stats)
    }

    /// Expand a big-endian stream read from a [`Read`] to a [`Write`].
    ///
    /// Both are buffered internally, so the input may be consumed beyond the
    /// end-of-message code.
    pub fn expand_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<LzwStats, IoLzwError> {
        let mut reader = <BitReader<BE, _>>::new(ByteAdapter::new(BufReader::new(input)));
        let mut writer = <BitWriter<BE, _>>::new(ByteAdapter::new(BufWriter::new(output)));
        let stats = self.expand(&mut reader, &mut writer)?;
        writer.close().map_err(LzwError::Write)?;
        Ok(stats)
    }
}

/// Read the next codeword, telling a stream that ends cleanly before the
/// end-of-message code from a truncated one.
#[inline]
fn next_codeword<E: Endianness, R: BitRead<E>, WE: Error + Send + Sync + 'static>(
    input: &mut R,
    width: usize,
    stats: &mut LzwStats,
) -> Result<u32, LzwError<R::Error, WE>> {
    let code = input
        .try_read_bits(width)
        .map_err(LzwError::Read)?
        .ok_or(LzwError::MissingEndMarker)?;
    stats.codewords += 1;
    trace!(code, "codeword");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unpack a big-endian stream of 12-bit codewords.
    fn codewords(stream: &[u8]) -> Vec<u32> {
        let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(stream));
        let mut codes = vec![];
        while let Some(code) = reader.try_read_bits(12).unwrap() {
            codes.push(code);
            if code == END_OF_MESSAGE {
                break;
            }
        }
        codes
    }

    #[test]
    fn test_aaa() -> Result<(), MemLzwError> {
        let lzw = Lzw::default();
        let stream = lzw.compress_to_vec(b"aaa")?;
        assert_eq!(codewords(&stream), [b'a' as u32, FIRST_CODE, END_OF_MESSAGE]);
        assert_eq!(stream, [0x06, 0x11, 0x01, 0x10, 0x00]);
        assert_eq!(lzw.expand_from_slice(&stream)?, b"aaa");
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), MemLzwError> {
        let lzw = Lzw::default();
        let stream = lzw.compress_to_vec(b"")?;
        assert_eq!(codewords(&stream), [END_OF_MESSAGE]);
        assert_eq!(stream, [0x10, 0x00]);
        assert!(lzw.expand_from_slice(&stream)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_stats() {
        let lzw = Lzw::default();
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(data));
        let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        let stats = lzw.compress(&mut reader, &mut writer).unwrap();
        let stream = writer.into_inner().unwrap().into_inner();
        assert_eq!(stats.decoded_bytes, data.len() as u64);
        assert_eq!(stats.encoded_bytes, stream.len() as u64);
        assert_eq!(stats.codewords, codewords(&stream).len() as u64);
        // one code for each codeword but the last one and the end marker
        assert_eq!(stats.learned as u64, stats.codewords - 2);
        assert!(!stats.frozen);

        let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(&stream));
        let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        let expand_stats = lzw.expand(&mut reader, &mut writer).unwrap();
        assert_eq!(expand_stats, stats);
        assert_eq!(writer.into_inner().unwrap().into_inner(), data);
    }

    fn round_trip_16<E: Endianness>(lzw: &Lzw, data: &[u8]) {
        let mut reader = <BitReader<E, _>>::new(MemByteReader::new(data));
        let mut writer = <BitWriter<E, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        let stats = lzw.compress(&mut reader, &mut writer).unwrap();
        let stream = writer.into_inner().unwrap().into_inner();
        // every codeword fills two bytes, so there is no padding
        assert_eq!(stream.len() as u64, stats.codewords * 2);

        let mut reader = <BitReader<E, _>>::new(MemByteReader::new(&stream));
        let mut writer = <BitWriter<E, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
        let expand_stats = lzw.expand(&mut reader, &mut writer).unwrap();
        assert_eq!(expand_stats, stats);
        assert_eq!(writer.into_inner().unwrap().into_inner(), data);
    }

    #[test]
    fn test_byte_aligned_codewords() {
        let lzw = Lzw::new(LzwParams::new(16).unwrap());
        let repeated = vec![b'x'; 5000];
        let cases: [&[u8]; 5] = [b"", b"abc", b"aaa", b"TOBEORNOTTOBEORTOBEORNOT", &repeated];
        for data in cases {
            round_trip_16::<BE>(&lzw, data);
            round_trip_16::<LE>(&lzw, data);
        }

        let stream = lzw.compress_to_vec(b"abc").unwrap();
        assert_eq!(stream, [0x00, 0x61, 0x00, 0x62, 0x00, 0x63, 0x01, 0x00]);
        assert_eq!(lzw.expand_from_slice(&stream).unwrap(), b"abc");
    }

    #[test]
    fn test_invalid_first_code() {
        let mut stream = Vec::<u8>::new();
        {
            let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(&mut stream));
            writer.write_bits(FIRST_CODE, 12).unwrap();
            writer.write_bits(END_OF_MESSAGE, 12).unwrap();
        }
        match Lzw::default().expand_from_slice(&stream) {
            Err(LzwError::InvalidCode { code, next_code }) => {
                assert_eq!(code, FIRST_CODE);
                assert_eq!(next_code, FIRST_CODE);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
