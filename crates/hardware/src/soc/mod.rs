//! System-on-Chip (SoC) Components.
//!
//! The collaborators the CPU core talks to: the system bus, RAM, the MMIO
//! devices, and the builder that assembles them into a `System`.

/// System builder for assembling SoC components.
pub mod builder;

/// Memory-mapped I/O device implementations.
pub mod devices;

/// System bus interconnect and routing.
pub mod interconnect;

/// Main memory (RAM) device and its backing buffer.
pub mod memory;

/// Device trait definitions for MMIO access.
pub mod traits;

pub use builder::System;
pub use interconnect::Bus;
