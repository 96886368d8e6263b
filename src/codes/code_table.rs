/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The decoder dictionary: an array mapping codes to byte strings.

use super::params::{ALPHABET_SIZE, FIRST_CODE, LzwParams};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The mirror of the encoder [`PrefixTrie`](super::PrefixTrie) used when
/// expanding.
///
/// A fresh table contains the single-byte strings for codes in [0 . . 256)
/// and leaves the end-of-message code unused; codes are then assigned in
/// order, starting from [`FIRST_CODE`], until the capacity given by the
/// [`LzwParams`] is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct CodeTable {
    /// The string of each assigned code; the end-of-message slot is empty.
    entries: Vec<Vec<u8>>,
    /// The maximum number of entries.
    capacity: u32,
}

impl CodeTable {
    /// Create a table with the byte values pre-assigned.
    #[must_use]
    pub fn new(params: LzwParams) -> Self {
        let capacity = params.capacity();
        let mut entries = Vec::with_capacity(capacity as usize);
        entries.extend((0..ALPHABET_SIZE).map(|byte| vec![byte as u8]));
        // end-of-message
        entries.push(Vec::new());
        debug_assert_eq!(entries.len() as u32, FIRST_CODE);
        Self { entries, capacity }
    }

    /// Return the string of `code`, or `None` if `code` has not been assigned.
    #[inline]
    #[must_use]
    pub fn get(&self, code: u32) -> Option<&[u8]> {
        self.entries
            .get(code as usize)
            .map(Vec::as_slice)
            .filter(|entry| !entry.is_empty())
    }

    /// The code that [`push`](Self::push) will assign next.
    #[inline(always)]
    #[must_use]
    pub fn next_code(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Whether all codes have been assigned.
    #[inline(always)]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_code() >= self.capacity
    }

    /// Assign the next code to `entry` and return it, or return `None`,
    /// leaving the table unchanged, if the table is full.
    pub fn push(&mut self, entry: Vec<u8>) -> Option<u32> {
        debug_assert!(!entry.is_empty());
        if self.is_full() {
            return None;
        }
        let code = self.next_code();
        self.entries.push(entry);
        Some(code)
    }

    /// The number of codes assigned after the byte values and the
    /// end-of-message code.
    #[must_use]
    pub fn learned(&self) -> u32 {
        self.next_code() - FIRST_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::END_OF_MESSAGE;

    #[test]
    fn test_seeded() {
        let table = CodeTable::new(LzwParams::default());
        for byte in 0..=255_u8 {
            assert_eq!(table.get(byte as u32), Some(&[byte][..]));
        }
        assert_eq!(table.get(END_OF_MESSAGE), None);
        assert_eq!(table.get(FIRST_CODE), None);
        assert_eq!(table.next_code(), FIRST_CODE);
        assert_eq!(table.learned(), 0);
    }

    #[test]
    fn test_fills_up() {
        let params = LzwParams::new(9).unwrap();
        let mut table = CodeTable::new(params);
        for code in FIRST_CODE..params.capacity() {
            assert!(!table.is_full());
            assert_eq!(table.push(vec![1, 2]), Some(code));
        }
        assert!(table.is_full());
        assert_eq!(table.push(vec![3, 4]), None);
        assert_eq!(table.learned(), 512 - 257);
        assert_eq!(table.get(511), Some(&[1, 2][..]));
        assert_eq!(table.get(512), None);
    }
}
