//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by the decoder, the CPU core,
//! and the bus. It includes:
//! 1. **Constants:** Instruction sizes, memory map defaults, and exit conventions.
//! 2. **Memory Access:** Access type and access width definitions for the bus contract.
//! 3. **Error Handling:** The `Trap` fault object and host-side `SimError`.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access type and width definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

pub use data::{AccessType, MemWidth};
pub use error::{BusFault, SimError, Trap};
