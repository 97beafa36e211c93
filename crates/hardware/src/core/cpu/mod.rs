//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the explicit context every
//! instruction handler operates on. It holds:
//! 1. **Architectural State:** The register file and program counter.
//! 2. **Atomic State:** The hart's LR/SC reservation set.
//! 3. **System Integration:** The system bus with RAM and devices.
//! 4. **Observability:** Retirement statistics and the instruction trace switch.

/// Fetch, decode, and dispatch.
pub mod execution;

/// Memory access helpers for fetch, loads, and stores.
pub mod memory;

use std::fmt;

use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::units::lsu::ReservationSet;
use crate::isa::abi;
use crate::soc::System;
use crate::stats::SimStats;

pub use execution::Retired;

/// Processor context of a single hart.
///
/// There is no global state: everything an instruction may read or modify is
/// reachable from this value, and handlers receive it by `&mut`.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter of the next instruction to fetch.
    pub pc: u64,
    /// The hart's load reservation.
    pub reservations: ReservationSet,
    /// System bus and devices.
    pub bus: System,
    /// Retirement statistics.
    pub stats: SimStats,
    /// Log every retired instruction at `trace` level.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU attached to `system`.
    ///
    /// The PC starts at `general.start_pc` (or the RAM base) and `sp` at
    /// `general.initial_sp` (or the top of RAM). A loader normally moves the
    /// PC to the image entry afterwards.
    pub fn new(system: System, config: &Config) -> Self {
        let mut regs = Gpr::new();
        let sp = config
            .general
            .initial_sp
            .unwrap_or_else(|| config.system.ram_end());
        regs.write(abi::REG_SP, sp);

        Self {
            regs,
            pc: config.general.start_pc.unwrap_or(config.system.ram_base),
            reservations: ReservationSet::new(),
            bus: system,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Creates a CPU at `pc` with zeroed registers and default options.
    pub fn with_pc(system: System, pc: u64) -> Self {
        Self {
            regs: Gpr::new(),
            pc,
            reservations: ReservationSet::new(),
            bus: system,
            stats: SimStats::default(),
            trace: false,
        }
    }
}

impl fmt::Display for Cpu {
    /// Register dump used when a run ends on a fatal trap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pc = {:#018x}", self.pc)?;
        write!(f, "{}", self.regs)
    }
}
