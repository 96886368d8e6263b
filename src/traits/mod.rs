/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for bit streams, the byte backends they are built on, and the
bit-order selector types.

*/

mod bits;
pub use bits::*;

mod bytes;
pub use bytes::*;

mod endianness;
pub use endianness::*;
