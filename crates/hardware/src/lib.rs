//! RISC-V RV64 interpretive emulator library.
//!
//! This crate implements a single-hart RV64IMA interpreter with the following:
//! 1. **ISA:** Field extraction, immediates, and a table that classifies every
//!    32-bit encoding into an instruction identity and its handler.
//! 2. **Core:** The CPU context (registers, PC, LR/SC reservations), the
//!    fetch-decode-execute step, and the instruction semantics.
//! 3. **SoC:** Bus, RAM, and the UART and SysCon MMIO devices.
//! 4. **Simulation:** Image loading, the run loop, configuration, and statistics.

/// Common types and constants (widths, traps, host errors).
pub mod common;
/// Simulator configuration (JSON-deserializable, fully defaulted).
pub mod config;
/// CPU core (context, execution step, semantics, functional units).
pub mod core;
/// Instruction set (fields, immediates, identities, decode table, disassembly).
pub mod isa;
/// Image loader and run loop.
pub mod sim;
/// System-on-chip (builder, bus, devices, memory, traits).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Processor context of one hart.
pub use crate::core::Cpu;
/// Loader plus run loop around a `Cpu`.
pub use crate::sim::Simulator;
/// Top-level system (bus, RAM, devices); construct with `System::new`.
pub use crate::soc::System;
