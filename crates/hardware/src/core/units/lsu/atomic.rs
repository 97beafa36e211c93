//! Atomic memory operation ALU.
//!
//! Implements the read-modify-write arithmetic for RISC-V A-extension
//! atomic memory operations (AMO). Given the current memory value and
//! the register source value, computes the new value to be written back.
//!
//! One generic routine serves both widths. Word operands are compared and
//! combined as 32-bit values; the written-back word is taken from the low
//! 32 bits of the result by the store.

use crate::core::units::alu::OperandWidth;
use crate::isa::rv64a::funct5;

/// Read-modify-write operation of an AMO instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomicOp {
    /// `amoswap`: write the register value.
    Swap,
    /// `amoadd`: wrapping addition.
    Add,
    /// `amoxor`: bitwise XOR.
    Xor,
    /// `amoand`: bitwise AND.
    And,
    /// `amoor`: bitwise OR.
    Or,
    /// `amomin`: signed minimum.
    Min,
    /// `amomax`: signed maximum.
    Max,
    /// `amominu`: unsigned minimum.
    Minu,
    /// `amomaxu`: unsigned maximum.
    Maxu,
}

impl AtomicOp {
    /// Maps an AMO `funct5` selector to its operation.
    ///
    /// Returns `None` for LR, SC and unassigned selectors.
    pub const fn from_funct5(f5: u32) -> Option<Self> {
        match f5 {
            funct5::AMOSWAP => Some(Self::Swap),
            funct5::AMOADD => Some(Self::Add),
            funct5::AMOXOR => Some(Self::Xor),
            funct5::AMOAND => Some(Self::And),
            funct5::AMOOR => Some(Self::Or),
            funct5::AMOMIN => Some(Self::Min),
            funct5::AMOMAX => Some(Self::Max),
            funct5::AMOMINU => Some(Self::Minu),
            funct5::AMOMAXU => Some(Self::Maxu),
            _ => None,
        }
    }
}

/// Computes the value an AMO writes back to memory.
///
/// # Arguments
///
/// * `op`      - The atomic operation type
/// * `mem_val` - The current value read from memory
/// * `reg_val` - The value from the source register (`rs2`)
///
/// # Returns
///
/// The new memory value, sign-extended from the operand width.
pub fn atomic_alu<W: OperandWidth>(op: AtomicOp, mem_val: u64, reg_val: u64) -> u64 {
    let (a, b) = (W::signed(mem_val), W::signed(reg_val));
    let (ua, ub) = (W::zext(mem_val), W::zext(reg_val));
    let res = match op {
        AtomicOp::Swap => reg_val,
        AtomicOp::Add => mem_val.wrapping_add(reg_val),
        AtomicOp::Xor => mem_val ^ reg_val,
        AtomicOp::And => mem_val & reg_val,
        AtomicOp::Or => mem_val | reg_val,
        AtomicOp::Min => a.min(b) as u64,
        AtomicOp::Max => a.max(b) as u64,
        AtomicOp::Minu => ua.min(ub),
        AtomicOp::Maxu => ua.max(ub),
    };
    W::sext(res)
}
