/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use lzw_bitstream::fuzz::bit_stream::*;

fuzz_target!(|data: FuzzCase| harness(data));
