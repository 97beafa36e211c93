//! Execution units.
//!
//! Pure functional units used by the instruction semantics: the integer ALU
//! and the load/store unit's atomic support.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Load/Store Unit: AMO arithmetic and LR/SC reservations.
pub mod lsu;
