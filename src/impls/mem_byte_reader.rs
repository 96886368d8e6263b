/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;

use crate::traits::*;

/// An implementation of [`ByteRead`] for a slice.
///
/// Reading never fails: the end of the slice is reported as `Ok(None)`.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let data = [0x0A_u8, 0x0B];
/// let mut byte_reader = MemByteReader::new(&data);
///
/// assert_eq!(byte_reader.position(), 0);
/// assert_eq!(byte_reader.read_byte().unwrap(), Some(0x0A));
/// assert_eq!(byte_reader.read_byte().unwrap(), Some(0x0B));
/// assert_eq!(byte_reader.position(), 2);
/// assert_eq!(byte_reader.read_byte().unwrap(), None);
/// assert_eq!(byte_reader.position(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Create a new [`MemByteReader`] from a slice of data
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// The index of the next byte to read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.byte_index
    }

    /// The number of bytes still to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.as_ref().len() - self.byte_index
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    type Error = Infallible;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Infallible> {
        let byte = self.data.as_ref().get(self.byte_index).copied();
        if byte.is_some() {
            self.byte_index += 1;
        }
        Ok(byte)
    }
}
