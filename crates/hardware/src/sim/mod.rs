//! Simulation utilities and program loading.
//!
//! Provides the image loader and the [`Simulator`] run loop built on top of
//! [`Cpu::step`](crate::core::Cpu::step).

/// ELF and flat-binary image loading.
pub mod loader;

/// CPU ownership and the run loop.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
