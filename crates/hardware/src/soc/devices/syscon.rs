//! System Controller (SysCon).
//!
//! A memory-mapped device guest software writes to in order to end the
//! simulation. The requested exit code is published through a shared atomic
//! cell that the run loop polls after every instruction.
//!
//! # Registers
//!
//! * `0x00`: Command Register (Write Only)
//!   * `0x5555`: Power Off (exit code 0)
//!   * `0x7777`: Reset (treated as exit code 0)
//!   * `0x3333`: Failure; bits 31:16 carry the exit code, 1 when zero

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::common::MemWidth;
use crate::soc::traits::Device;

/// Size of the SysCon register window.
pub const SYSCON_SIZE: u64 = 0x1000;

/// Command: power off.
pub const CMD_POWEROFF: u64 = 0x5555;
/// Command: reset.
pub const CMD_RESET: u64 = 0x7777;
/// Command: failure.
pub const CMD_FAIL: u64 = 0x3333;

const CMD_MASK: u64 = 0xFFFF;
const FAIL_CODE_SHIFT: u32 = 16;

/// SysCon device structure.
#[derive(Debug)]
pub struct SysCon {
    base_addr: u64,
    exit_signal: Arc<AtomicU64>,
}

impl SysCon {
    /// Creates a SysCon at `base_addr` publishing exit requests to `exit_signal`.
    pub const fn new(base_addr: u64, exit_signal: Arc<AtomicU64>) -> Self {
        Self {
            base_addr,
            exit_signal,
        }
    }
}

impl Device for SysCon {
    fn name(&self) -> &str {
        "SysCon"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, SYSCON_SIZE)
    }

    fn read(&mut self, _offset: u64, _width: MemWidth) -> u64 {
        0
    }

    fn write(&mut self, offset: u64, value: u64, width: MemWidth) {
        if offset != 0 || width < MemWidth::Word {
            return;
        }
        let code = match value & CMD_MASK {
            CMD_POWEROFF => {
                info!("syscon: poweroff requested");
                0
            }
            CMD_RESET => {
                info!("syscon: reset requested, treated as exit");
                0
            }
            CMD_FAIL => {
                let code = (value >> FAIL_CODE_SHIFT) & CMD_MASK;
                let code = if code == 0 { 1 } else { code };
                info!(code, "syscon: failure reported");
                code
            }
            _ => return,
        };
        self.exit_signal.store(code, Ordering::Relaxed);
    }
}
