/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Parameters of the LZW codec.

The code space is split in three parts: codes in [0 . . 256) are the byte
values, code [`END_OF_MESSAGE`] terminates a stream, and codes from
[`FIRST_CODE`] up to the capacity of the dictionary are assigned in order of
first appearance. The capacity is two to the power of the codeword width, so
the width is the only free parameter; encoder and decoder must agree on it.

*/

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The number of byte values, each of which has a code of its own.
pub const ALPHABET_SIZE: u32 = 256;

/// The code terminating every stream.
pub const END_OF_MESSAGE: u32 = ALPHABET_SIZE;

/// The first code assigned to a sequence of two or more bytes.
pub const FIRST_CODE: u32 = END_OF_MESSAGE + 1;

/// The error returned when building invalid [`LzwParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error(
        "The codeword width has to be in [{}, {}] and {width} is not",
        LzwParams::MIN_WIDTH,
        LzwParams::MAX_WIDTH
    )]
    InvalidWidth { width: usize },
}

/// The configuration shared by encoder and decoder: the codeword width.
///
/// The default width is 12 bits, that is, a dictionary of 4096 codes.
///
/// With the `serde` feature this structure serializes as its width, which is
/// validated again on deserialization.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let params = LzwParams::default();
/// assert_eq!(params.width(), 12);
/// assert_eq!(params.capacity(), 4096);
/// assert!(LzwParams::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct LzwParams {
    width: usize,
}

impl LzwParams {
    /// The smallest width whose dictionary has room beyond the byte values
    /// and the end-of-message code.
    pub const MIN_WIDTH: usize = 9;
    pub const MAX_WIDTH: usize = 16;
    pub const DEFAULT_WIDTH: usize = 12;

    /// Create parameters for codewords of `width` bits.
    pub const fn new(width: usize) -> Result<Self, ParamsError> {
        if width < Self::MIN_WIDTH || width > Self::MAX_WIDTH {
            return Err(ParamsError::InvalidWidth { width });
        }
        Ok(Self { width })
    }

    /// The number of bits of each codeword.
    #[inline(always)]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The number of codes in the dictionary, including the byte values and
    /// the end-of-message code.
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        1 << self.width
    }
}

impl Default for LzwParams {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }
}

impl TryFrom<usize> for LzwParams {
    type Error = ParamsError;

    fn try_from(width: usize) -> Result<Self, ParamsError> {
        Self::new(width)
    }
}

impl From<LzwParams> for usize {
    fn from(params: LzwParams) -> usize {
        params.width
    }
}
