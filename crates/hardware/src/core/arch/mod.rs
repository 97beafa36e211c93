//! RISC-V architectural state.
//!
//! Only the integer register file is architectural state of this core; the
//! program counter and reservation set live directly on [`Cpu`](crate::core::Cpu).

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
