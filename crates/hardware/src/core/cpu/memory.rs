//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the system bus.
//! It performs the following:
//! 1. **Fault Mapping:** Converts a `BusFault` into the access-fault trap of the access type.
//! 2. **Fetch:** Reads instruction words, enforcing PC alignment.
//! 3. **Reservation Upkeep:** Every store drops a reservation overlapping its bytes.

use super::Cpu;
use crate::common::constants::INSTRUCTION_ALIGNMENT;
use crate::common::{AccessType, BusFault, MemWidth, Trap};

/// Maps a failed bus access to the trap its access type raises.
const fn access_fault(access: AccessType, fault: BusFault) -> Trap {
    match access {
        AccessType::Fetch => Trap::InstructionAccessFault(fault.addr),
        AccessType::Read => Trap::LoadAccessFault(fault.addr),
        AccessType::Write => Trap::StoreAccessFault(fault.addr),
    }
}

impl Cpu {
    /// Fetches the 32-bit word at `pc`.
    ///
    /// # Errors
    ///
    /// `InstructionAddressMisaligned` if `pc` is not 4-byte aligned,
    /// `InstructionAccessFault` if the bus rejects the read.
    pub fn fetch(&mut self, pc: u64) -> Result<u32, Trap> {
        if pc % INSTRUCTION_ALIGNMENT != 0 {
            return Err(Trap::InstructionAddressMisaligned(pc));
        }
        let word = self.access_load(pc, MemWidth::Word, AccessType::Fetch)?;
        Ok(word as u32)
    }

    /// Reads `width` raw bits at `addr` for a load.
    ///
    /// # Errors
    ///
    /// `LoadAccessFault` if the bus rejects the read.
    pub fn load(&mut self, addr: u64, width: MemWidth) -> Result<u64, Trap> {
        self.access_load(addr, width, AccessType::Read)
    }

    /// Reads `width` raw bits at `addr`, reporting a failure as `access` would.
    ///
    /// # Errors
    ///
    /// The access-fault trap matching `access` if the bus rejects the read.
    pub fn access_load(
        &mut self,
        addr: u64,
        width: MemWidth,
        access: AccessType,
    ) -> Result<u64, Trap> {
        self.bus
            .bus
            .read(addr, width)
            .map_err(|fault| access_fault(access, fault))
    }

    /// Writes the low `width` bits of `value` at `addr`.
    ///
    /// Reservations overlapping the written bytes are invalidated.
    ///
    /// # Errors
    ///
    /// `StoreAccessFault` if the bus rejects the write; the reservation is
    /// left as it was.
    pub fn store(&mut self, addr: u64, value: u64, width: MemWidth) -> Result<(), Trap> {
        self.bus
            .bus
            .write(addr, value, width)
            .map_err(|fault| access_fault(AccessType::Write, fault))?;
        self.reservations.invalidate(addr, width);
        Ok(())
    }
}
