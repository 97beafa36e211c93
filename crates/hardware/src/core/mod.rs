//! Core processor implementation.
//!
//! This module contains the interpretive CPU: its architectural state, the
//! fetch/decode/dispatch loop, the pure execution units, and the per-instruction
//! semantics the decode table points at.

/// Architectural state (general-purpose registers).
pub mod arch;

/// CPU context, dispatcher, and memory access helpers.
pub mod cpu;

/// Leaf instruction handlers.
pub mod semantics;

/// Execution units (ALU, LSU atomics and reservations).
pub mod units;

pub use self::cpu::{Cpu, Retired};
