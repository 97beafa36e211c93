//! Universal Asynchronous Receiver-Transmitter (UART).
//!
//! The transmit half of a 16550: bytes written to THR go straight to a host
//! sink (stdout unless overridden) and LSR always reports an idle
//! transmitter, so polling drivers never block. There is no receive path;
//! every other register reads as zero and ignores writes.

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::common::MemWidth;
use crate::soc::traits::Device;

/// Size of the UART register window.
pub const UART_SIZE: u64 = 0x100;

/// Transmitter Holding Register (Write).
const REG_THR: u64 = 0;
/// Line Status Register.
const REG_LSR: u64 = 5;

/// Line Status Register: Transmitter Holding Register Empty.
const LSR_THRE: u64 = 0x20;
/// Line Status Register: Transmitter Empty.
const LSR_TEMT: u64 = 0x40;

/// 16550 UART, transmit only.
pub struct Uart {
    base_addr: u64,
    sink: Box<dyn Write + Send>,
}

impl fmt::Debug for Uart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uart")
            .field("base_addr", &format_args!("{:#x}", self.base_addr))
            .finish_non_exhaustive()
    }
}

impl Uart {
    /// Creates a UART at `base_addr` that prints to stdout.
    pub fn new(base_addr: u64) -> Self {
        Self::with_sink(base_addr, Box::new(io::stdout()))
    }

    /// Creates a UART at `base_addr` writing transmitted bytes to `sink`.
    pub fn with_sink(base_addr: u64, sink: Box<dyn Write + Send>) -> Self {
        Self { base_addr, sink }
    }
}

impl Device for Uart {
    fn name(&self) -> &str {
        "UART0"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, UART_SIZE)
    }

    fn read(&mut self, offset: u64, _width: MemWidth) -> u64 {
        match offset {
            REG_LSR => LSR_THRE | LSR_TEMT,
            _ => 0,
        }
    }

    fn write(&mut self, offset: u64, value: u64, _width: MemWidth) {
        if offset != REG_THR {
            return;
        }
        let byte = [value as u8];
        if let Err(err) = self.sink.write_all(&byte).and_then(|()| self.sink.flush()) {
            warn!(%err, "uart: host sink write failed");
        }
    }
}
