/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use std::io::{ErrorKind, Read, Write};

/// An adapter from [`Read`] and [`Write`] to [`ByteRead`] and [`ByteWrite`],
/// respectively.
///
/// Instances of this struct can be created using [`ByteAdapter::new`]. They
/// turn every standard source or destination of bytes (such as
/// [`std::fs::File`], [`std::io::BufReader`], sockets, etc.) into a source or
/// destination of bytes for bit streams.
///
/// The adapter performs one call to the backend per byte, so unbuffered
/// backends such as files should be wrapped in a [`std::io::BufReader`] or
/// [`std::io::BufWriter`].
///
/// A read returning zero bytes is the end of the source; interrupted reads
/// and writes are retried.
#[derive(Debug, Clone)]
pub struct ByteAdapter<B> {
    backend: B,
}

impl<B> ByteAdapter<B> {
    /// Create a new ByteAdapter
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> ByteRead for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, std::io::Error> {
        let mut byte = [0_u8];
        loop {
            match self.backend.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), std::io::Error> {
        self.backend.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), std::io::Error> {
        self.backend.flush()
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use std::io::{BufReader, BufWriter};

    #[test]
    fn test_byte_adapter() {
        let data: Vec<u8> = (0..=255).collect();
        let path = std::env::temp_dir().join("test_lzw_byte_adapter");
        {
            let mut writer =
                ByteAdapter::new(BufWriter::new(std::fs::File::create(&path).unwrap()));
            for &value in &data {
                writer.write_byte(value).unwrap();
            }
            writer.flush().unwrap();
        }
        {
            let mut reader = ByteAdapter::new(BufReader::new(std::fs::File::open(&path).unwrap()));
            for &value in &data {
                assert_eq!(Some(value), reader.read_byte().unwrap());
            }
            assert_eq!(None, reader.read_byte().unwrap());
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_byte_adapter_bits() {
        let values: [u32; 16] = [
            0x5f, 0x68, 0xdb, 0xca, 0x79, 0x17, 0xf3, 0x37, 0x2c, 0x46, 0x63, 0xf7, 0xf3, 0x28,
            0xa4, 0x8d,
        ];
        let path = std::env::temp_dir().join("test_lzw_byte_adapter_bits");
        {
            let mut writer = <BitWriter<BE, _>>::new(ByteAdapter::new(BufWriter::new(
                std::fs::File::create(&path).unwrap(),
            )));
            for &value in &values {
                writer.write_bits(value, 11).unwrap();
            }
            writer.close().unwrap();
        }
        // 16 × 11 bits round up to 22 bytes
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 22);
        {
            let mut reader = <BitReader<BE, _>>::new(ByteAdapter::new(BufReader::new(
                std::fs::File::open(&path).unwrap(),
            )));
            for &value in &values {
                assert_eq!(value, reader.read_bits(11).unwrap());
            }
        }
        std::fs::remove_file(&path).unwrap();
    }
}
