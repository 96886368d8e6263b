/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keep tracks of written bits. Optionally,
/// prints to standard error information about methods called.
#[derive(Debug, Clone)]
pub struct CountBitWriter<E: Endianness, BW: BitWrite<E>, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`],
    /// not including padding.
    pub bits_written: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, BW: BitWrite<E>, const PRINT: bool> CountBitWriter<E, BW, PRINT> {
    #[must_use]
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<E: Endianness, BW: BitWrite<E>, const PRINT: bool> BitWrite<E>
    for CountBitWriter<E, BW, PRINT>
{
    type Error = BW::Error;

    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        self.bit_write.write_bit(bit).map(|_| {
            self.bits_written += 1;
            if PRINT {
                eprintln!("write_bit({}) (total = {})", bit, self.bits_written);
            }
        })
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.bit_write.write_byte(byte).map(|_| {
            self.bits_written += 8;
            if PRINT {
                eprintln!("write_byte({:#04x}) (total = {})", byte, self.bits_written);
            }
        })
    }

    fn write_bits(&mut self, value: u32, n: usize) -> Result<usize, Self::Error> {
        self.bit_write.write_bits(value, n).map(|x| {
            self.bits_written += x;
            if PRINT {
                eprintln!(
                    "write_bits({:#010x}, {}) = {} (total = {})",
                    value, n, x, self.bits_written
                );
            }
            x
        })
    }

    fn flush(&mut self) -> Result<usize, Self::Error> {
        self.bit_write.flush().map(|x| {
            if PRINT {
                eprintln!("flush() = {} (total = {})", x, self.bits_written);
            }
            x
        })
    }
}

/// Wrapping struct that keep tracks of read bits. Optionally,
/// prints to standard error information about methods called.
#[derive(Debug, Clone)]
pub struct CountBitReader<E: Endianness, BR: BitRead<E>, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, BR: BitRead<E>, const PRINT: bool> CountBitReader<E, BR, PRINT> {
    #[must_use]
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<E: Endianness, BR: BitRead<E>, const PRINT: bool> BitRead<E>
    for CountBitReader<E, BR, PRINT>
{
    type Error = BR::Error;

    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        self.bit_read.read_bit().map(|x| {
            self.bits_read += 1;
            if PRINT {
                eprintln!("read_bit() = {} (total = {})", x, self.bits_read);
            }
            x
        })
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.bit_read.read_byte().map(|x| {
            self.bits_read += 8;
            if PRINT {
                eprintln!("read_byte() = {:#04x} (total = {})", x, self.bits_read);
            }
            x
        })
    }

    fn read_bits(&mut self, n: usize) -> Result<u32, Self::Error> {
        self.bit_read.read_bits(n).map(|x| {
            self.bits_read += n;
            if PRINT {
                eprintln!(
                    "read_bits({}) = {:#010x} (total = {})",
                    n, x, self.bits_read
                );
            }
            x
        })
    }

    fn try_read_bits(&mut self, n: usize) -> Result<Option<u32>, Self::Error> {
        self.bit_read.try_read_bits(n).map(|x| {
            if x.is_some() {
                self.bits_read += n;
            }
            if PRINT {
                eprintln!(
                    "try_read_bits({}) = {:?} (total = {})",
                    n, x, self.bits_read
                );
            }
            x
        })
    }

    fn read_to_end(&mut self) -> Result<Vec<u8>, Self::Error> {
        self.bit_read.read_to_end().map(|x| {
            self.bits_read += x.len() * 8;
            if PRINT {
                eprintln!(
                    "read_to_end() = {} bytes (total = {})",
                    x.len(),
                    self.bits_read
                );
            }
            x
        })
    }
}
