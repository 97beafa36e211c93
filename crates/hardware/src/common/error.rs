//! Trap and error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Trap Representation:** The recoverable fault object raised by decode and execute.
//! 2. **Bus Faults:** The failure of a bus access under the `Fault` unmapped-access policy.
//! 3. **Host Errors:** `SimError` for loading images and reading configuration.

use thiserror::Error;

use crate::isa::privileged::cause::exception;

/// RISC-V synchronous exceptions raised by instruction fetch, decode, or execution.
///
/// A trap is a structured condition (cause code plus the offending value)
/// handed to the surrounding execution loop. Trap delivery into a guest
/// handler is not performed by this crate; the loop decides what to do.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Instruction address misaligned exception.
    ///
    /// Raised when a jump or taken branch targets an address that is not
    /// 4-byte aligned. The associated value is the misaligned target.
    #[error("InstructionAddressMisaligned({0:#x})")]
    InstructionAddressMisaligned(u64),

    /// Instruction access fault exception.
    ///
    /// Raised when an instruction fetch hits unmapped memory under the
    /// `Fault` policy. The associated value is the fetch address.
    #[error("InstructionAccessFault({0:#x})")]
    InstructionAccessFault(u64),

    /// Illegal instruction exception.
    ///
    /// Raised when no decode table entry exists for the instruction at any
    /// level (opcode, funct3, or discriminant). The associated value is the
    /// instruction encoding.
    #[error("IllegalInstruction({0:#x})")]
    IllegalInstruction(u32),

    /// Breakpoint exception raised by `EBREAK`. The value is the program counter.
    #[error("Breakpoint({0:#x})")]
    Breakpoint(u64),

    /// Load address misaligned exception.
    ///
    /// Raised by `LR.W`/`LR.D` when the effective address is not a multiple
    /// of the access width. The associated value is the misaligned address.
    #[error("LoadAddressMisaligned({0:#x})")]
    LoadAddressMisaligned(u64),

    /// Load access fault exception. The value is the faulting address.
    #[error("LoadAccessFault({0:#x})")]
    LoadAccessFault(u64),

    /// Store/AMO address misaligned exception.
    ///
    /// Raised by `SC` and AMO instructions on a misaligned effective address.
    #[error("StoreAddressMisaligned({0:#x})")]
    StoreAddressMisaligned(u64),

    /// Store/AMO access fault exception. The value is the faulting address.
    #[error("StoreAccessFault({0:#x})")]
    StoreAccessFault(u64),

    /// Environment call raised by `ECALL`. The value is the program counter.
    #[error("EnvironmentCall({0:#x})")]
    EnvironmentCall(u64),
}

impl Trap {
    /// Returns the RISC-V exception cause code (`mcause` encoding).
    pub const fn cause(&self) -> u64 {
        match self {
            Self::InstructionAddressMisaligned(_) => exception::INSTRUCTION_ADDRESS_MISALIGNED,
            Self::InstructionAccessFault(_) => exception::INSTRUCTION_ACCESS_FAULT,
            Self::IllegalInstruction(_) => exception::ILLEGAL_INSTRUCTION,
            Self::Breakpoint(_) => exception::BREAKPOINT,
            Self::LoadAddressMisaligned(_) => exception::LOAD_ADDRESS_MISALIGNED,
            Self::LoadAccessFault(_) => exception::LOAD_ACCESS_FAULT,
            Self::StoreAddressMisaligned(_) => exception::STORE_ADDRESS_MISALIGNED,
            Self::StoreAccessFault(_) => exception::STORE_ACCESS_FAULT,
            Self::EnvironmentCall(_) => exception::ENVIRONMENT_CALL_FROM_M_MODE,
        }
    }

    /// Returns the trap value (`mtval` encoding): the faulting address,
    /// instruction word, or program counter carried by the variant.
    pub const fn tval(&self) -> u64 {
        match self {
            Self::IllegalInstruction(inst) => *inst as u64,
            Self::InstructionAddressMisaligned(v)
            | Self::InstructionAccessFault(v)
            | Self::Breakpoint(v)
            | Self::LoadAddressMisaligned(v)
            | Self::LoadAccessFault(v)
            | Self::StoreAddressMisaligned(v)
            | Self::StoreAccessFault(v)
            | Self::EnvironmentCall(v) => *v,
        }
    }
}

/// A bus access that no device claimed while the `Fault` policy is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unmapped bus access at {addr:#x}")]
pub struct BusFault {
    /// Physical address of the first byte of the rejected access.
    pub addr: u64,
}

/// Host-side failures: loading images, parsing configuration.
///
/// These never describe guest behaviour; guest faults are always a `Trap`.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading an image or configuration file failed.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file looked like an ELF image but could not be parsed.
    #[error("invalid ELF image: {0}")]
    Elf(#[from] object::Error),

    /// The ELF image is not a 64-bit little-endian RISC-V executable.
    #[error("unsupported ELF image: {0}")]
    UnsupportedElf(&'static str),

    /// The image (or one of its segments) does not fit in the mapped RAM.
    #[error("image segment [{start:#x}, {end:#x}) does not fit in RAM")]
    ImageOutOfRange {
        /// First byte of the segment.
        start: u64,
        /// One past the last byte of the segment.
        end: u64,
    },

    /// The host could not provide the configured amount of guest RAM.
    #[error("could not allocate {size} bytes of guest RAM: {source}")]
    RamAllocation {
        /// Requested RAM size in bytes.
        size: u64,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Two devices were registered over intersecting address windows.
    #[error("device '{device}' overlaps the window of '{existing}'")]
    DeviceOverlap {
        /// Device being registered.
        device: String,
        /// Device already owning part of the window.
        existing: String,
    },

    /// A write to the bus failed while placing the image.
    #[error(transparent)]
    Bus(#[from] BusFault),

    /// The configuration JSON is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
