//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by all bus-attached components. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Width-tagged reads and writes at device-relative offsets.
//! 3. **Bulk load:** `write_bytes` for placing images into RAM.
//!
//! Devices are independent types behind one capability interface; the bus
//! keeps a registry of their address windows and never needs to know which
//! concrete device it is talking to.

use crate::common::MemWidth;

/// Trait for memory-mapped devices attached to the system bus.
///
/// Offsets are relative to the device base. The bus only forwards an access
/// when every byte of it lies inside `address_range`, so implementors may
/// assume `offset + width.bytes() <= size`.
pub trait Device: Send {
    /// Returns a short name for this device (e.g., `"UART0"`, `"DRAM"`).
    fn name(&self) -> &str;

    /// Returns `(base_address, size_in_bytes)` for this device's window.
    fn address_range(&self) -> (u64, u64);

    /// Reads `width` bytes (little-endian) at `offset`, zero-extended to 64 bits.
    fn read(&mut self, offset: u64, width: MemWidth) -> u64;

    /// Writes the low `width` bytes of `value` (little-endian) at `offset`.
    fn write(&mut self, offset: u64, value: u64, width: MemWidth);

    /// Writes a contiguous byte slice at the given offset (default: byte-by-byte).
    fn write_bytes(&mut self, offset: u64, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write(offset + i as u64, u64::from(*byte), MemWidth::Byte);
        }
    }
}
