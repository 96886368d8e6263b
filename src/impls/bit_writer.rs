/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::bit_buffer::BitBuffer;
use crate::traits::*;

/// An implementation of [`BitWrite`] for a [`ByteWrite`].
///
/// This implementation keeps a one-byte bit buffer holding the bits that do
/// not fill a byte yet. The buffer is handed to the backend as soon as it is
/// full; [`flush`](BitWrite::flush) writes a partial buffer padded with zeros.
///
/// The writer is flushed when dropped, but errors are then ignored: call
/// [`close`](BitWriter::close) or [`into_inner`](BitWriter::into_inner) to
/// observe them.
///
/// Endianness can be selected using the parameter `E`.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let mut writer = <BitWriter<BE, _>>::new(MemByteWriterVec::new(Vec::<u8>::new()));
/// writer.write_bit(true).unwrap();
/// writer.write_bits(0b010, 3).unwrap();
/// writer.write_byte(0x0F).unwrap();
/// let data = writer.into_inner().unwrap().into_inner();
/// assert_eq!(data, [0b1010_0000, 0b1111_0000]);
/// ```
#[derive(Debug)]
pub struct BitWriter<E: Endianness, BW: ByteWrite> {
    /// The [`ByteWrite`] to which we will write bytes; it is taken only by
    /// [`BitWriter::into_inner`].
    backend: Option<BW>,
    /// The bits that do not make a full byte yet.
    buffer: BitBuffer,
    /// Number of bits written so far, not including padding.
    bits_written: u64,
    /// Whether [`BitWriter::close`] has been called.
    closed: bool,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, BW: ByteWrite> BitWriter<E, BW> {
    /// Create a new [`BitWriter`] around a [`ByteWrite`].
    #[must_use]
    pub fn new(backend: BW) -> Self {
        Self {
            backend: Some(backend),
            buffer: BitBuffer::new(),
            bits_written: 0,
            closed: false,
            _marker: core::marker::PhantomData,
        }
    }

    /// The number of bits written so far, not including padding.
    #[must_use]
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Flush the writer. Further calls do nothing.
    pub fn close(&mut self) -> Result<(), BitError<BW::Error>> {
        if !self.closed {
            BitWrite::<E>::flush(self)?;
            self.closed = true;
        }
        Ok(())
    }

    /// Flush the writer and return the backend.
    pub fn into_inner(mut self) -> Result<BW, BitError<BW::Error>> {
        self.close()?;
        match self.backend.take() {
            Some(backend) => Ok(backend),
            None => unreachable!("the backend is taken only once"),
        }
    }

    /// Write a byte to the backend.
    #[inline(always)]
    fn write_to_backend(&mut self, byte: u8) -> Result<(), BitError<BW::Error>> {
        match self.backend.as_mut() {
            Some(backend) => backend.write_byte(byte).map_err(BitError::Backend),
            None => Ok(()),
        }
    }

    /// Hand a full buffer to the backend.
    #[inline(always)]
    fn emit(&mut self) -> Result<(), BitError<BW::Error>> {
        debug_assert!(self.buffer.is_full());
        let byte = self.buffer.drain::<E>();
        self.write_to_backend(byte)
    }
}

impl<E: Endianness, BW: ByteWrite> core::ops::Drop for BitWriter<E, BW> {
    fn drop(&mut self) {
        // After into_inner there is nothing left to flush
        if self.backend.is_some() {
            // During a drop we can't save anything if it goes bad :/
            let _ = self.close();
        }
    }
}

impl<E: Endianness, BW: ByteWrite> BitWrite<E> for BitWriter<E, BW> {
    type Error = BitError<BW::Error>;

    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        self.buffer.put::<E>(bit as u8, 1);
        self.bits_written += 1;
        if self.buffer.is_full() {
            self.emit()?;
        }
        Ok(())
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.buffer.is_empty() {
            // aligned: the buffer stays empty
            self.write_to_backend(byte)?;
        } else {
            let free = self.buffer.space_left();
            let held = BitBuffer::BITS - free;
            let (head, tail) = if E::MSB_FIRST {
                (byte >> held, byte)
            } else {
                (byte, byte >> free)
            };
            self.buffer.put::<E>(head, free);
            self.emit()?;
            self.buffer.put::<E>(tail, held);
        }
        self.bits_written += 8;
        Ok(())
    }

    #[inline]
    fn write_bits(&mut self, value: u32, n: usize) -> Result<usize, Self::Error> {
        check_width(n)?;

        #[cfg(feature = "checks")]
        assert!(
            n == MAX_BITS || value >> n == 0,
            "Error value {} does not fit in {} bits",
            value,
            n
        );

        match n {
            8 => return self.write_byte(value as u8).map(|_| n),
            16 => return self.write_i16(value as u16 as i16).map(|_| n),
            32 => return self.write_i32(value as i32).map(|_| n),
            _ => {}
        }

        let n = n as u8;
        let mut done = 0_u8;
        while done < n {
            let chunk = (n - done).min(self.buffer.space_left());
            let bits = if E::MSB_FIRST {
                value >> (n - done - chunk)
            } else {
                value >> done
            };
            self.buffer.put::<E>(bits as u8, chunk);
            done += chunk;
            if self.buffer.is_full() {
                self.emit()?;
            }
        }
        self.bits_written += n as u64;
        Ok(n as usize)
    }

    fn flush(&mut self) -> Result<usize, Self::Error> {
        let flushed = self.buffer.len() as usize;
        if flushed > 0 {
            let byte = self.buffer.drain::<E>();
            self.write_to_backend(byte)?;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.flush().map_err(BitError::Backend)?;
        }
        Ok(flushed)
    }
}
