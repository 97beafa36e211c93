//! System-on-Chip construction and top-level `System` type.
//!
//! This module builds the SoC from configuration. It performs:
//! 1. **Bus setup:** Creates the interconnect with the configured unmapped-access policy.
//! 2. **Device registration:** Instantiates RAM, UART, and SysCon at their configured bases.
//! 3. **Exit signalling:** Owns the shared cell SysCon writes an exit code into.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::common::constants::NO_EXIT_REQUESTED;
use crate::common::{BusFault, SimError};
use crate::config::Config;
use crate::soc::devices::{SysCon, Uart};
use crate::soc::interconnect::Bus;
use crate::soc::memory::Memory;

/// Top-level system instance containing the bus and the exit flag.
#[derive(Debug)]
pub struct System {
    /// System interconnect; routes accesses to RAM and MMIO devices.
    pub bus: Bus,
    /// Exit code requested by a device, or `NO_EXIT_REQUESTED`.
    pub exit_request: Arc<AtomicU64>,
}

impl System {
    /// Builds the standard system (RAM, UART on stdout, SysCon) from `config`.
    ///
    /// # Errors
    ///
    /// Fails if guest RAM cannot be allocated or device windows overlap.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let uart = Uart::new(config.system.uart_base);
        Self::with_uart(config, uart)
    }

    /// Builds the standard system with UART output redirected to `sink`.
    ///
    /// # Errors
    ///
    /// Fails if guest RAM cannot be allocated or device windows overlap.
    pub fn with_uart_sink(config: &Config, sink: Box<dyn Write + Send>) -> Result<Self, SimError> {
        let uart = Uart::with_sink(config.system.uart_base, sink);
        Self::with_uart(config, uart)
    }

    fn with_uart(config: &Config, uart: Uart) -> Result<Self, SimError> {
        let sys = &config.system;
        let mut system = Self::from_bus(Bus::new(sys.unmapped_access));

        let mem = Memory::new(sys.ram_base, sys.ram_size as usize).map_err(|source| {
            SimError::RamAllocation {
                size: sys.ram_size,
                source,
            }
        })?;
        let syscon = SysCon::new(sys.syscon_base, Arc::clone(&system.exit_request));

        system.bus.add_device(Box::new(mem))?;
        system.bus.add_device(Box::new(uart))?;
        system.bus.add_device(Box::new(syscon))?;
        Ok(system)
    }

    /// Wraps an already populated bus. Devices that want to request an exit
    /// must be handed a clone of the returned system's `exit_request`.
    pub fn from_bus(bus: Bus) -> Self {
        Self {
            bus,
            exit_request: Arc::new(AtomicU64::new(NO_EXIT_REQUESTED)),
        }
    }

    /// Loads a binary into memory at the given physical address.
    ///
    /// # Errors
    ///
    /// Returns a `BusFault` if part of the range is unmapped under the
    /// `Fault` policy.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u64) -> Result<(), BusFault> {
        self.bus.load_binary_at(data, addr)
    }

    /// Returns the requested exit code if a device has requested shutdown.
    pub fn check_exit(&self) -> Option<u64> {
        let val = self.exit_request.load(Ordering::Relaxed);
        if val == NO_EXIT_REQUESTED {
            None
        } else {
            Some(val)
        }
    }
}
