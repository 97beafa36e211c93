//! Physical System Memory (DRAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** Backing storage (`DramBuffer`) for RAM contents.
//! 2. **Memory:** Device implementation that maps the buffer at a physical base address.

/// DRAM buffer implementation (mmap or heap) for raw byte storage.
pub mod buffer;

use std::io;

use self::buffer::DramBuffer;
use crate::common::MemWidth;
use crate::soc::traits::Device;

/// RAM mapped at a fixed physical base address. Accesses are little-endian.
#[derive(Debug)]
pub struct Memory {
    buffer: DramBuffer,
    base_addr: u64,
}

impl Memory {
    /// Allocates `size` bytes of zeroed RAM at `base_addr`.
    ///
    /// # Errors
    ///
    /// Propagates the host allocation failure from [`DramBuffer::new`].
    pub fn new(base_addr: u64, size: usize) -> io::Result<Self> {
        Ok(Self {
            buffer: DramBuffer::new(size)?,
            base_addr,
        })
    }

    /// Returns the RAM contents.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "DRAM"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.buffer.len() as u64)
    }

    fn read(&mut self, offset: u64, width: MemWidth) -> u64 {
        let (start, n) = (offset as usize, width.bytes() as usize);
        let mut bytes = [0u8; 8];
        bytes[..n].copy_from_slice(&self.buffer.as_slice()[start..start + n]);
        u64::from_le_bytes(bytes)
    }

    fn write(&mut self, offset: u64, value: u64, width: MemWidth) {
        let (start, n) = (offset as usize, width.bytes() as usize);
        self.buffer.as_mut_slice()[start..start + n].copy_from_slice(&value.to_le_bytes()[..n]);
    }

    fn write_bytes(&mut self, offset: u64, data: &[u8]) {
        let start = offset as usize;
        self.buffer.as_mut_slice()[start..start + data.len()].copy_from_slice(data);
    }
}
