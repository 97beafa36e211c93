//! Memory-Mapped IO Devices.
//!
//! The peripherals a bare-metal guest needs: a console (UART) and a way to
//! stop the simulation (SysCon). RAM lives in [`crate::soc::memory`].

/// System Controller (power and reset control).
pub mod syscon;

/// UART 16550-compatible serial port (transmit only).
pub mod uart;

pub use syscon::SysCon;
pub use uart::Uart;

pub use crate::soc::traits::Device;
