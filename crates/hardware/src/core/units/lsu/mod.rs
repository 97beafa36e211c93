//! Load/Store Unit (LSU).
//!
//! Support for the RISC-V A extension:
//! - [`atomic`]: Read-modify-write ALU for AMO instructions.
//! - [`reservation`]: The LR/SC reservation set.

/// Atomic memory operation ALU (RISC-V A extension).
pub mod atomic;

/// Load-reserved address tracking for LR/SC.
pub mod reservation;

pub use atomic::{AtomicOp, atomic_alu};
pub use reservation::{Reservation, ReservationSet};
