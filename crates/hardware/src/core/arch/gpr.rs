//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RISC-V architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Renders the complete register state with ABI names.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero: writes to it are discarded and reads
/// always return 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads register `idx` (0-31). Register `x0` always returns 0.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx & (NUM_GPRS - 1)] }
    }

    /// Writes `val` to register `idx` (0-31). Writes to `x0` are discarded.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx & (NUM_GPRS - 1)] = val;
        }
    }
}

impl fmt::Display for Gpr {
    /// Two registers per line, ABI name then value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "x{:<2} {:>4}={:#018x}  x{:<2} {:>4}={:#018x}",
                i,
                abi::reg_name(i),
                self.read(i),
                i + 1,
                abi::reg_name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
