/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

const DEBUG: bool = false;

macro_rules! debugln {
    ($($arg:tt)*) => {
        if DEBUG {
            println!($($arg)*);
        }
    };
}

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bit(bool),
    Byte(u8),
    Bits(u32, usize),
    I16(i16),
    I32(i32),
}

/// Write the commands on big- and little-endian streams, and check that
/// reading them back gives the same values and consumes the same bits.
pub fn harness(data: FuzzCase) {
    let mut data = data;
    for command in &mut data.commands {
        if let RandomCommand::Bits(value, n) = command {
            *n = 1 + (*n % MAX_BITS);
            if *n < MAX_BITS {
                *value &= (1 << *n) - 1;
            }
        }
    }
    debugln!("{:#?}", data);

    let mut buffer_be = Vec::<u8>::new();
    let mut buffer_le = Vec::<u8>::new();
    let mut total_bits = 0_u64;
    {
        let mut big = <BitWriter<BE, _>>::new(MemByteWriterVec::new(&mut buffer_be));
        let mut little = <BitWriter<LE, _>>::new(MemByteWriterVec::new(&mut buffer_le));
        for command in &data.commands {
            total_bits += match *command {
                RandomCommand::Bit(bit) => {
                    big.write_bit(bit).unwrap();
                    little.write_bit(bit).unwrap();
                    1
                }
                RandomCommand::Byte(byte) => {
                    big.write_byte(byte).unwrap();
                    little.write_byte(byte).unwrap();
                    8
                }
                RandomCommand::Bits(value, n) => {
                    assert_eq!(big.write_bits(value, n).unwrap(), n);
                    assert_eq!(little.write_bits(value, n).unwrap(), n);
                    n as u64
                }
                RandomCommand::I16(value) => {
                    big.write_i16(value).unwrap();
                    little.write_i16(value).unwrap();
                    16
                }
                RandomCommand::I32(value) => {
                    big.write_i32(value).unwrap();
                    little.write_i32(value).unwrap();
                    32
                }
            };
            assert_eq!(big.bits_written(), total_bits);
            assert_eq!(little.bits_written(), total_bits);
        }
    }
    assert_eq!(buffer_be.len() as u64, total_bits.div_ceil(8));
    assert_eq!(buffer_le.len() as u64, total_bits.div_ceil(8));

    let mut big = <BitReader<BE, _>>::new(MemByteReader::new(&buffer_be));
    let mut little = <BitReader<LE, _>>::new(MemByteReader::new(&buffer_le));
    for command in &data.commands {
        match *command {
            RandomCommand::Bit(bit) => {
                assert_eq!(big.read_bit().unwrap(), bit);
                assert_eq!(little.read_bit().unwrap(), bit);
            }
            RandomCommand::Byte(byte) => {
                assert_eq!(big.read_byte().unwrap(), byte);
                assert_eq!(little.read_byte().unwrap(), byte);
            }
            RandomCommand::Bits(value, n) => {
                assert_eq!(big.read_bits(n).unwrap(), value);
                assert_eq!(little.read_bits(n).unwrap(), value);
            }
            RandomCommand::I16(value) => {
                assert_eq!(big.read_i16().unwrap(), value);
                assert_eq!(little.read_i16().unwrap(), value);
            }
            RandomCommand::I32(value) => {
                assert_eq!(big.read_i32().unwrap(), value);
                assert_eq!(little.read_i32().unwrap(), value);
            }
        }
    }
    assert_eq!(big.bits_read(), total_bits);
    assert_eq!(little.bits_read(), total_bits);
    // only padding is left
    let padding = (8 - total_bits % 8) % 8;
    if padding > 0 {
        assert_eq!(big.read_bits(padding as usize).unwrap(), 0);
        assert_eq!(little.read_bits(padding as usize).unwrap(), 0);
    }
    assert!(!big.has_more().unwrap());
    assert!(!little.has_more().unwrap());
}
