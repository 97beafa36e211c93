//! Operand width views.
//!
//! RV64 executes most integer operations in two widths: the full 64-bit
//! register and the low 32-bit word (the `W`-suffixed forms). Word results are
//! always sign-extended from bit 31 back into the 64-bit register. The
//! [`OperandWidth`] trait captures that difference so arithmetic and atomic
//! routines are written once and instantiated for [`Word`] and [`Double`].

use crate::common::MemWidth;

/// A 32-bit or 64-bit view of a register operand.
pub trait OperandWidth {
    /// Number of significant bits.
    const BITS: u32;

    /// Bus width of a memory access at this operand width.
    const MEM: MemWidth;

    /// Mask applied to register-supplied shift amounts.
    const SHAMT_MASK: u32;

    /// Keeps the low `BITS` bits and sign-extends them to 64 bits.
    fn sext(value: u64) -> u64;

    /// Keeps the low `BITS` bits, zero-extended.
    fn zext(value: u64) -> u64;

    /// The low `BITS` bits interpreted as a signed integer.
    #[inline(always)]
    fn signed(value: u64) -> i64 {
        Self::sext(value) as i64
    }
}

/// 32-bit operands (`.w` atomics and `*W` arithmetic).
#[derive(Clone, Copy, Debug)]
pub struct Word;

/// 64-bit operands.
#[derive(Clone, Copy, Debug)]
pub struct Double;

impl OperandWidth for Word {
    const BITS: u32 = 32;
    const MEM: MemWidth = MemWidth::Word;
    const SHAMT_MASK: u32 = 0x1F;

    #[inline(always)]
    fn sext(value: u64) -> u64 {
        value as i32 as i64 as u64
    }

    #[inline(always)]
    fn zext(value: u64) -> u64 {
        value & u64::from(u32::MAX)
    }
}

impl OperandWidth for Double {
    const BITS: u32 = 64;
    const MEM: MemWidth = MemWidth::Double;
    const SHAMT_MASK: u32 = 0x3F;

    #[inline(always)]
    fn sext(value: u64) -> u64 {
        value
    }

    #[inline(always)]
    fn zext(value: u64) -> u64 {
        value
    }
}
