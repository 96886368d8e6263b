/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;

use crate::traits::*;

/// An implementation of [`ByteWrite`] for a [`Vec<u8>`], or a mutable
/// reference to one, that grows as bytes are written.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let mut bytes: Vec<u8> = vec![0x01];
///
/// let mut byte_writer = MemByteWriterVec::new(&mut bytes);
/// assert_eq!(byte_writer.len(), 1);
/// assert!(byte_writer.write_byte(0x02).is_ok());
/// assert_eq!(byte_writer.len(), 2);
/// assert_eq!(bytes, [0x01, 0x02]);
/// ```
#[derive(Debug, PartialEq)]
pub struct MemByteWriterVec<B: AsMut<Vec<u8>>> {
    data: B,
}

impl<B: AsMut<Vec<u8>>> MemByteWriterVec<B> {
    /// Create a new [`MemByteWriterVec`] appending to the given vector.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data }
    }

    /// The number of bytes in the underlying vector.
    pub fn len(&mut self) -> usize {
        self.data.as_mut().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    type Error = Infallible;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
        self.data.as_mut().push(byte);
        Ok(())
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
