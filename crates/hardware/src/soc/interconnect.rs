//! System interconnect (bus) for memory and MMIO access.
//!
//! This module implements the bus that routes physical address accesses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range, sorted, and checked for overlap.
//! 2. **Access routing:** Width-tagged reads and writes with a last-device hint for throughput.
//! 3. **Unmapped policy:** Accesses no device claims either read as zero and drop writes,
//!    or fail with a `BusFault`, depending on the configured `UnmappedAccess`.
//! 4. **Image loading:** Bulk byte writes into whichever device owns the target range.

use tracing::{debug, warn};

use crate::common::{BusFault, MemWidth, SimError};
use crate::config::UnmappedAccess;
use crate::soc::traits::Device;

/// System bus connecting the CPU and devices; routes accesses by physical address.
pub struct Bus {
    devices: Vec<Box<dyn Device>>,
    policy: UnmappedAccess,
    last_device_idx: usize,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field(
                "devices",
                &self.devices.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Bus {
    /// Creates an empty bus applying `policy` to unmapped accesses.
    pub const fn new(policy: UnmappedAccess) -> Self {
        Self {
            devices: Vec::new(),
            policy,
            last_device_idx: 0,
        }
    }

    /// Returns the unmapped-access policy in force.
    pub const fn policy(&self) -> UnmappedAccess {
        self.policy
    }

    /// Registers a device; devices are kept sorted by base address.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DeviceOverlap` if the new window intersects an
    /// existing one. The bus is left unchanged in that case.
    pub fn add_device(&mut self, dev: Box<dyn Device>) -> Result<(), SimError> {
        let (base, size) = dev.address_range();
        let end = base.saturating_add(size);
        if let Some(other) = self.devices.iter().find(|d| {
            let (b, s) = d.address_range();
            base < b.saturating_add(s) && b < end
        }) {
            return Err(SimError::DeviceOverlap {
                device: dev.name().to_owned(),
                existing: other.name().to_owned(),
            });
        }

        debug!(
            device = dev.name(),
            "registered device at [{base:#x}, {end:#x})"
        );
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
        Ok(())
    }

    /// Returns the names of all registered devices in address order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|d| d.name())
    }

    /// Returns whether the given physical address is backed by any device.
    pub fn is_valid_address(&self, paddr: u64) -> bool {
        self.devices.iter().any(|dev| {
            let (start, size) = dev.address_range();
            paddr >= start && paddr - start < size
        })
    }

    /// Finds the device whose window holds all `len` bytes starting at `paddr`.
    fn find_device(&mut self, paddr: u64, len: u64) -> Option<(usize, u64)> {
        let fits = |dev: &dyn Device| {
            let (start, size) = dev.address_range();
            paddr >= start && size >= len && paddr - start <= size - len
        };

        if let Some(dev) = self.devices.get(self.last_device_idx) {
            if fits(dev.as_ref()) {
                let start = dev.address_range().0;
                return Some((self.last_device_idx, paddr - start));
            }
        }

        let idx = self.devices.iter().position(|d| fits(d.as_ref()))?;
        self.last_device_idx = idx;
        Some((idx, paddr - self.devices[idx].address_range().0))
    }

    /// Reads `width` bytes at `paddr`, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// Returns a `BusFault` when no device claims the whole access and the
    /// policy is `UnmappedAccess::Fault`. Under `Ignore` the read yields 0.
    pub fn read(&mut self, paddr: u64, width: MemWidth) -> Result<u64, BusFault> {
        if let Some((idx, offset)) = self.find_device(paddr, width.bytes()) {
            return Ok(self.devices[idx].read(offset, width));
        }
        match self.policy {
            UnmappedAccess::Ignore => {
                warn!(%width, "read from unmapped address {paddr:#x} returns 0");
                Ok(0)
            }
            UnmappedAccess::Fault => Err(BusFault { addr: paddr }),
        }
    }

    /// Writes the low `width` bytes of `value` at `paddr`.
    ///
    /// # Errors
    ///
    /// Returns a `BusFault` when no device claims the whole access and the
    /// policy is `UnmappedAccess::Fault`. Under `Ignore` the write is dropped.
    pub fn write(&mut self, paddr: u64, value: u64, width: MemWidth) -> Result<(), BusFault> {
        if let Some((idx, offset)) = self.find_device(paddr, width.bytes()) {
            self.devices[idx].write(offset, value & width.mask(), width);
            return Ok(());
        }
        match self.policy {
            UnmappedAccess::Ignore => {
                warn!(%width, "write of {value:#x} to unmapped address {paddr:#x} dropped");
                Ok(())
            }
            UnmappedAccess::Fault => Err(BusFault { addr: paddr }),
        }
    }

    /// Writes a binary blob into memory at the given physical address.
    ///
    /// If one device claims the whole range, the blob goes through its
    /// `write_bytes`; otherwise it is written byte by byte under the bus policy.
    ///
    /// # Errors
    ///
    /// Returns the first `BusFault` raised by a byte write.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u64) -> Result<(), BusFault> {
        if let Some((idx, offset)) = self.find_device(addr, data.len() as u64) {
            self.devices[idx].write_bytes(offset, data);
            return Ok(());
        }
        for (i, byte) in data.iter().enumerate() {
            self.write(addr + i as u64, u64::from(*byte), MemWidth::Byte)?;
        }
        Ok(())
    }
}
