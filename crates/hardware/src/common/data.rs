//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the bus and the CPU:
//! 1. **Fault Generation:** `AccessType` decides which access-fault trap a bus fault maps to.
//! 2. **Access Width:** `MemWidth` is the `width` parameter of every bus read and write.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// so that a failed bus access is reported with the correct trap cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    Fetch,

    /// Data read access (loads, LR, the read half of an AMO).
    Read,

    /// Data write access (stores, SC, the write half of an AMO).
    Write,
}

/// Width of a single bus access.
///
/// The bus contract only knows these four widths; signedness is the caller's
/// concern and never reaches the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
    /// 64-bit access.
    Double,
}

impl MemWidth {
    /// Returns the access width in bits (8, 16, 32 or 64).
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }

    /// Returns the access width in bytes (1, 2, 4 or 8).
    #[inline(always)]
    pub const fn bytes(self) -> u64 {
        (self.bits() / 8) as u64
    }

    /// Returns a mask covering the low `bits()` bits of a 64-bit value.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        match self {
            Self::Double => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// Maps a width in bits back to a `MemWidth`.
    ///
    /// Returns `None` for anything other than 8, 16, 32 or 64.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Byte),
            16 => Some(Self::Half),
            32 => Some(Self::Word),
            64 => Some(Self::Double),
            _ => None,
        }
    }

    /// Returns `true` if `addr` is a multiple of this width.
    #[inline(always)]
    pub const fn is_aligned(self, addr: u64) -> bool {
        addr & (self.bytes() - 1) == 0
    }
}

impl fmt::Display for MemWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
