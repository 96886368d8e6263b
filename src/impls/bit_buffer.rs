/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Endianness;

/// Returns a byte with the lowest `n` bits set, `n` in [1 . . 8].
#[inline(always)]
const fn mask(n: u8) -> u8 {
    debug_assert!(n >= 1 && n <= 8);
    u8::MAX >> (8 - n)
}

/// The one-byte bit buffer shared by [`BitReader`](super::BitReader) and
/// [`BitWriter`](super::BitWriter).
///
/// The valid bits are always the lowest `len` bits of `word`, and `len` is
/// always in [0 . . 8]. In a big-endian buffer the oldest valid bit is the
/// highest one; in a little-endian buffer it is the lowest one, and bits
/// above `len` are kept at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BitBuffer {
    word: u8,
    len: u8,
}

impl BitBuffer {
    /// The capacity of the buffer in bits.
    pub const BITS: u8 = 8;

    #[must_use]
    pub const fn new() -> Self {
        Self { word: 0, len: 0 }
    }

    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.len
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == Self::BITS
    }

    /// The number of bits that can still be put in the buffer.
    #[inline(always)]
    #[must_use]
    pub const fn space_left(&self) -> u8 {
        Self::BITS - self.len
    }

    /// Loads a full byte into an empty buffer.
    #[inline(always)]
    pub fn fill(&mut self, byte: u8) {
        debug_assert!(self.is_empty());
        self.word = byte;
        self.len = Self::BITS;
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.word = 0;
        self.len = 0;
    }

    /// Removes the `n` oldest bits and returns them in the lowest bits,
    /// oldest bit first according to `E`.
    #[inline(always)]
    pub fn take<E: Endianness>(&mut self, n: u8) -> u8 {
        debug_assert!(n >= 1 && n <= self.len);
        self.len -= n;
        if E::MSB_FIRST {
            (self.word >> self.len) & mask(n)
        } else {
            let bits = self.word & mask(n);
            self.word = ((self.word as u16) >> n) as u8;
            bits
        }
    }

    /// Appends the lowest `n` bits of `bits` after the newest ones.
    #[inline(always)]
    pub fn put<E: Endianness>(&mut self, bits: u8, n: u8) {
        debug_assert!(n >= 1 && n <= self.space_left());
        if E::MSB_FIRST {
            self.word = (((self.word as u16) << n) as u8) | (bits & mask(n));
        } else {
            self.word |= (((bits & mask(n)) as u16) << self.len) as u8;
        }
        self.len += n;
        debug_assert!(self.len <= Self::BITS);
    }

    /// Empties the buffer, returning its content as a byte whose unused
    /// positions are zero-filled.
    #[inline(always)]
    pub fn drain<E: Endianness>(&mut self) -> u8 {
        let byte = match self.len {
            0 => 0,
            len if E::MSB_FIRST => (((self.word & mask(len)) as u16) << (Self::BITS - len)) as u8,
            len => self.word & mask(len),
        };
        self.clear();
        byte
    }
}
