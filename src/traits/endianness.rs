/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Inner private module used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// Marker trait for bit-order selector types.
///
/// Its only implementations are [`BigEndian`] and [`LittleEndian`].
///
/// The bit order decides which bit of each byte of the backend is the first
/// one of the stream, and consequently the order in which the bits of a value
/// spanning several bits are laid out. Multi-byte integers follow the same
/// convention: big-endian streams store them most-significant byte first,
/// little-endian streams least-significant byte first.
pub trait Endianness: private::Sealed + 'static {
    /// A short human-readable name, used in diagnostics.
    const NAME: &'static str;
    /// Whether the first bit of the stream is the most significant bit
    /// of the first byte.
    const MSB_FIRST: bool;
}

/// Selector type for big-endian (most-significant-bit first) streams.
///
/// This is the bit order of the LZW stream format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigEndian;

/// Selector type for little-endian (least-significant-bit first) streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

impl private::Sealed for BigEndian {}
impl private::Sealed for LittleEndian {}

impl Endianness for BigEndian {
    const NAME: &'static str = "BE";
    const MSB_FIRST: bool = true;
}

impl Endianness for LittleEndian {
    const NAME: &'static str = "LE";
    const MSB_FIRST: bool = false;
}
