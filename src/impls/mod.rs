/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte backends and of bit streams.

If you need to read or write bytes from a file or any backend implementing
[`std::io::Read`] or [`std::io::Write`] you just need to wrap it in a
[`ByteAdapter`].

In instead you want to read or write directly from memory, you can use
[`MemByteReader`] and [`MemByteWriterVec`], whose error type is
[`Infallible`](core::convert::Infallible).

Once you have a way to access bytes, you can use [`BitReader`] and
[`BitWriter`] to read or write bits from a byte stream. Both have a
statically selectable endianness and use a one-byte bit buffer to store
bits that are not yet read or written.

*/

mod bit_buffer;

mod mem_byte_reader;
pub use mem_byte_reader::*;

mod mem_byte_writer;
pub use mem_byte_writer::*;

mod byte_adapter;
pub use byte_adapter::*;

mod bit_reader;
pub use bit_reader::BitReader;

mod bit_writer;
pub use bit_writer::BitWriter;
