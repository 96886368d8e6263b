/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

LZW compression with fixed-width codewords.

A compressed stream is a sequence of codewords of the same width (12 bits by
default, see [`LzwParams`]), followed by zero padding up to a byte boundary.
Codewords are written with the most significant bit first when using
[`BE`](crate::traits::BE) and with the least significant bit first when
using [`LE`](crate::traits::LE).

| Code         | Meaning                                 |
|--------------|-----------------------------------------|
| 0 . . 255    | the corresponding byte                  |
| 256          | end of message                          |
| 257 . . 2ʷ-1 | strings assigned in order of appearance |

Every stream ends with the end-of-message code, so the empty input
compresses to a single codeword. For example, with 12-bit codewords `aaa`
compresses to the codewords 97, 257 (the newly assigned `aa`), and 256, that
is, to the five bytes `06 11 01 10 00`.

The compressor keeps its dictionary in a [`PrefixTrie`], and repeatedly
emits the code of the longest prefix of the remaining input that is in the
dictionary, adding that prefix extended by the next byte. The expander
rebuilds the same dictionary in a [`CodeTable`]. Once all codes have been
assigned the dictionary is frozen, and both sides keep using it unchanged.

*/

pub mod params;
pub use params::*;

pub mod prefix_trie;
pub use prefix_trie::PrefixTrie;

pub mod code_table;
pub use code_table::CodeTable;

pub mod lzw;
pub use lzw::{IoLzwError, Lzw, LzwError, LzwStats, MemLzwError};
