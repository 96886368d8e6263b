/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

use crate::traits::Endianness;
use num_traits::{AsPrimitive, PrimInt};

/// The largest number of bits that can be read or written with a single call
/// to [`BitRead::read_bits`] or [`BitWrite::write_bits`].
pub const MAX_BITS: usize = 32;

/// The error returned by bit streams.
///
/// It can be an error of the byte backend, an attempt to read past the end
/// of the stream, or a request for a number of bits that is zero or larger
/// than [`MAX_BITS`].
#[derive(Debug, thiserror::Error)]
pub enum BitError<E: Error + Send + Sync + 'static> {
    #[error("Unexpected end of stream at bit position {bit_pos}")]
    UnexpectedEof { bit_pos: u64 },
    #[error("The number of bits to read or write has to be in [1, 32] and {width} is not")]
    InvalidWidth { width: usize },
    #[error("Backend error: {0}")]
    Backend(#[source] E),
}

impl<E: Error + Send + Sync + 'static> BitError<E> {
    /// Returns true if this error signals the end of the stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, BitError::UnexpectedEof { .. })
    }
}

/// Checks that `n` is a valid number of bits for a single read or write.
#[inline(always)]
pub(crate) fn check_width<E: Error + Send + Sync + 'static>(n: usize) -> Result<(), BitError<E>> {
    if (1..=MAX_BITS).contains(&n) {
        Ok(())
    } else {
        Err(BitError::InvalidWidth { width: n })
    }
}

/// Sequential, streaming bit-by-bit reads.
///
/// Reads past the end of the stream fail; the only exception is
/// [`try_read_bits`](BitRead::try_read_bits), which reports an exhausted
/// stream as `Ok(None)` so that decoding loops can tell a clean end
/// from a truncated value.
///
/// Please see the documentation of the [`impls`](crate::impls) module for more
/// details.
pub trait BitRead<E: Endianness> {
    type Error: Error + Send + Sync + 'static;

    /// Read a single bit.
    fn read_bit(&mut self) -> Result<bool, Self::Error>;

    /// Read the next eight bits, whatever the current alignment.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Read `n` bits and return them in the lowest bits.
    ///
    /// `n` must be between 1 and [`MAX_BITS`]. Reads of 8, 16, and 32 bits are
    /// equivalent to [`read_byte`](BitRead::read_byte),
    /// [`read_i16`](BitRead::read_i16), and [`read_i32`](BitRead::read_i32).
    fn read_bits(&mut self, n: usize) -> Result<u32, Self::Error>;

    /// Like [`read_bits`](BitRead::read_bits), but returns `Ok(None)` if the
    /// stream is exhausted before the first bit is read.
    ///
    /// A stream ending after some, but not all, of the `n` bits is still an
    /// error.
    fn try_read_bits(&mut self, n: usize) -> Result<Option<u32>, Self::Error>;

    /// Read all the remaining bytes of the stream.
    ///
    /// An empty stream yields an empty vector. A stream whose remaining bits
    /// are not a multiple of eight fails on the last, partial byte.
    fn read_to_end(&mut self) -> Result<Vec<u8>, Self::Error>;

    /// Read an integer made of `size_of::<T>()` successive bytes, ordered
    /// according to the endianness of the stream.
    fn read_int<T: PrimInt + From<u8>>(&mut self) -> Result<T, Self::Error> {
        let mut value = T::zero();
        for i in 0..core::mem::size_of::<T>() {
            let byte = <T as From<u8>>::from(self.read_byte()?);
            value = if E::MSB_FIRST {
                (value << 8) | byte
            } else {
                value | (byte << (8 * i))
            };
        }
        Ok(value)
    }

    /// Read a 16-bit signed integer.
    #[inline(always)]
    fn read_i16(&mut self) -> Result<i16, Self::Error> {
        self.read_int()
    }

    /// Read a 32-bit signed integer.
    #[inline(always)]
    fn read_i32(&mut self) -> Result<i32, Self::Error> {
        self.read_int()
    }

    /// Read a 64-bit signed integer.
    #[inline(always)]
    fn read_i64(&mut self) -> Result<i64, Self::Error> {
        self.read_int()
    }
}

/// Sequential, streaming bit-by-bit writes.
///
/// Completed bytes are handed to the backend as soon as they are full;
/// a partial byte reaches the backend only on [`flush`](BitWrite::flush),
/// padded with zeros.
pub trait BitWrite<E: Endianness> {
    type Error: Error + Send + Sync + 'static;

    /// Write a single bit.
    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error>;

    /// Write eight bits, whatever the current alignment.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write the lowest `n` bits of `value` to the stream and return the number
    /// of bits written, that is, `n`.
    ///
    /// `n` must be between 1 and [`MAX_BITS`]. The other bits of `value` are
    /// ignored; if the feature `checks` is enabled, they must be zero.
    fn write_bits(&mut self, value: u32, n: usize) -> Result<usize, Self::Error>;

    /// Flush the bit buffer, padding the last byte with zeros, and then the
    /// backend.
    ///
    /// Returns the number of bits written from the bit buffer (not including
    /// padding).
    fn flush(&mut self) -> Result<usize, Self::Error>;

    /// Write a sequence of bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Write an integer as `size_of::<T>()` successive bytes, ordered
    /// according to the endianness of the stream.
    fn write_int<T: PrimInt + AsPrimitive<u8>>(&mut self, value: T) -> Result<(), Self::Error> {
        let len = core::mem::size_of::<T>();
        for i in 0..len {
            let shift = if E::MSB_FIRST { 8 * (len - 1 - i) } else { 8 * i };
            self.write_byte((value >> shift).as_())?;
        }
        Ok(())
    }

    /// Write a 16-bit signed integer.
    #[inline(always)]
    fn write_i16(&mut self, value: i16) -> Result<(), Self::Error> {
        self.write_int(value)
    }

    /// Write a 32-bit signed integer.
    #[inline(always)]
    fn write_i32(&mut self, value: i32) -> Result<(), Self::Error> {
        self.write_int(value)
    }

    /// Write a 64-bit signed integer.
    #[inline(always)]
    fn write_i64(&mut self, value: i64) -> Result<(), Self::Error> {
        self.write_int(value)
    }
}
