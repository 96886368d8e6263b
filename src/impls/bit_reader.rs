/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::bit_buffer::BitBuffer;
use crate::traits::*;

/// An implementation of [`BitRead`] for a [`ByteRead`].
///
/// This implementation keeps a one-byte bit buffer holding the bits of the
/// current byte that have not been read yet. The buffer is refilled from the
/// backend exactly when a read finds it empty; bytes read at a non-aligned
/// position are spliced from the tail of the buffered byte and the head of
/// the next one.
///
/// Once the backend reports that it is exhausted, the bits still in the
/// buffer can be read, after which every read fails with
/// [`BitError::UnexpectedEof`]; the condition is permanent.
///
/// Endianness can be selected using the parameter `E`.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let data = [0b1010_0000_u8, 0b1111_0000];
/// let mut reader = <BitReader<BE, _>>::new(MemByteReader::new(&data));
/// assert!(reader.read_bit().unwrap());
/// assert_eq!(reader.read_bits(3).unwrap(), 0b010);
/// assert_eq!(reader.read_byte().unwrap(), 0b0000_1111);
/// assert_eq!(reader.read_bits(4).unwrap(), 0);
/// assert!(reader.read_bit().is_err());
/// ```
#[derive(Debug)]
pub struct BitReader<E: Endianness, BR: ByteRead> {
    /// The [`ByteRead`] used to fill the buffer.
    backend: BR,
    /// The bits of the current byte not yet read.
    buffer: BitBuffer,
    /// Whether the backend reported the end of the data.
    exhausted: bool,
    /// Number of bits read so far.
    bits_read: u64,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, BR: ByteRead> BitReader<E, BR> {
    /// Create a new [`BitReader`] around a [`ByteRead`].
    #[must_use]
    pub fn new(backend: BR) -> Self {
        Self {
            backend,
            buffer: BitBuffer::new(),
            exhausted: false,
            bits_read: 0,
            _marker: core::marker::PhantomData,
        }
    }

    /// Return the backend, discarding the bits still in the buffer.
    pub fn into_inner(self) -> BR {
        self.backend
    }

    /// The number of bits read so far.
    #[must_use]
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Returns true if there is at least one more bit to read.
    ///
    /// If the buffer is empty, this method fetches the next byte from the
    /// backend, so it can fail with a backend error.
    pub fn has_more(&mut self) -> Result<bool, BitError<BR::Error>> {
        if !self.buffer.is_empty() {
            return Ok(true);
        }
        match self.fetch()? {
            Some(byte) => {
                self.buffer.fill(byte);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get the next byte from the backend, recording exhaustion.
    #[inline(always)]
    fn fetch(&mut self) -> Result<Option<u8>, BitError<BR::Error>> {
        if self.exhausted {
            return Ok(None);
        }
        let byte = self.backend.read_byte().map_err(BitError::Backend)?;
        self.exhausted = byte.is_none();
        Ok(byte)
    }

    /// Get the next byte from the backend, failing if there is none.
    #[inline(always)]
    fn next_byte(&mut self) -> Result<u8, BitError<BR::Error>> {
        self.fetch()?.ok_or(BitError::UnexpectedEof {
            bit_pos: self.bits_read,
        })
    }

    /// Fill the buffer, which must be empty.
    #[inline(always)]
    fn refill(&mut self) -> Result<(), BitError<BR::Error>> {
        let byte = self.next_byte()?;
        self.buffer.fill(byte);
        Ok(())
    }
}

impl<E: Endianness, BR: ByteRead> BitRead<E> for BitReader<E, BR> {
    type Error = BitError<BR::Error>;

    #[inline]
    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        if self.buffer.is_empty() {
            self.refill()?;
        }
        self.bits_read += 1;
        Ok(self.buffer.take::<E>(1) != 0)
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let byte = match self.buffer.len() {
            // aligned: the buffer stays empty
            0 => self.next_byte()?,
            // aligned, with a byte already fetched by `has_more`
            BitBuffer::BITS => self.buffer.take::<E>(BitBuffer::BITS),
            held => {
                let head = self.buffer.take::<E>(held);
                self.refill()?;
                let tail = self.buffer.take::<E>(BitBuffer::BITS - held);
                if E::MSB_FIRST {
                    (head << (BitBuffer::BITS - held)) | tail
                } else {
                    head | (tail << held)
                }
            }
        };
        self.bits_read += 8;
        Ok(byte)
    }

    #[inline]
    fn read_bits(&mut self, n: usize) -> Result<u32, Self::Error> {
        check_width(n)?;
        match n {
            8 => return self.read_byte().map(u32::from),
            16 => return self.read_i16().map(|value| value as u16 as u32),
            32 => return self.read_i32().map(|value| value as u32),
            _ => {}
        }

        let mut value = 0_u32;
        let mut done = 0_u8;
        let n = n as u8;
        while done < n {
            if self.buffer.is_empty() {
                self.refill()?;
            }
            let chunk = (n - done).min(self.buffer.len());
            let bits = self.buffer.take::<E>(chunk) as u32;
            if E::MSB_FIRST {
                value = (value << chunk) | bits;
            } else {
                value |= bits << done;
            }
            done += chunk;
            self.bits_read += chunk as u64;
        }
        Ok(value)
    }

    #[inline]
    fn try_read_bits(&mut self, n: usize) -> Result<Option<u32>, Self::Error> {
        check_width(n)?;
        if !self.has_more()? {
            return Ok(None);
        }
        self.read_bits(n).map(Some)
    }

    fn read_to_end(&mut self) -> Result<Vec<u8>, Self::Error> {
        let mut data = Vec::new();
        if self.buffer.is_empty() {
            // aligned: bypass the buffer
            while let Some(byte) = self.fetch()? {
                data.push(byte);
            }
            self.bits_read += 8 * data.len() as u64;
        } else {
            while self.has_more()? {
                data.push(self.read_byte()?);
            }
        }
        Ok(data)
    }
}
