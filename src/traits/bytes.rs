/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

/// Sequential, streaming byte-by-byte reads.
///
/// This is the source underlying a [`BitRead`](crate::traits::BitRead)
/// implementation.
pub trait ByteRead {
    type Error: Error + Send + Sync + 'static;

    /// Read a byte and advance the current position.
    ///
    /// Returns `Ok(None)` when the source is exhausted; this is not an error,
    /// as every stream eventually ends.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Sequential, streaming byte-by-byte writes.
///
/// This is the sink underlying a [`BitWrite`](crate::traits::BitWrite)
/// implementation.
pub trait ByteWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write a byte and advance the current position.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Flush the sink.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: ByteRead + ?Sized> ByteRead for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }
}

impl<T: ByteWrite + ?Sized> ByteWrite for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
