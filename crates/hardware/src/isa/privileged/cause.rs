//! Synchronous exception codes.
//!
//! The numbering follows the privileged architecture's `mcause` table so a
//! trap can be reported the way a real hart would. Interrupt causes do not
//! exist here: nothing in this machine raises one.

/// `mcause` values with the interrupt bit clear.
pub mod exception {
    /// Jump or branch target not 4-byte aligned.
    pub const INSTRUCTION_ADDRESS_MISALIGNED: u64 = 0;
    /// Fetch from an address the bus rejected.
    pub const INSTRUCTION_ACCESS_FAULT: u64 = 1;
    /// Undecodable or reserved encoding.
    pub const ILLEGAL_INSTRUCTION: u64 = 2;
    /// `ebreak`
    pub const BREAKPOINT: u64 = 3;
    /// `lr` from an address not aligned to its width.
    pub const LOAD_ADDRESS_MISALIGNED: u64 = 4;
    /// Load from an address the bus rejected.
    pub const LOAD_ACCESS_FAULT: u64 = 5;
    /// `sc` or AMO at an address not aligned to its width.
    pub const STORE_ADDRESS_MISALIGNED: u64 = 6;
    /// Store or AMO to an address the bus rejected.
    pub const STORE_ACCESS_FAULT: u64 = 7;
    /// `ecall`; the hart only ever runs at machine level.
    pub const ENVIRONMENT_CALL_FROM_M_MODE: u64 = 11;
}
