//! RISC-V System Opcodes.
//!
//! Only the unprivileged members of `OP_SYSTEM` are decoded. CSR access and
//! trap returns fall through to illegal instruction.

/// System instruction opcode (0b1110011).
pub const OP_SYSTEM: u32 = 0b1110011;

/// funct3 shared by ECALL and EBREAK.
pub const PRIV: u32 = 0b000;

/// funct12 (bits 31-20) of ECALL.
pub const FUNCT12_ECALL: u32 = 0x000;

/// funct12 (bits 31-20) of EBREAK.
pub const FUNCT12_EBREAK: u32 = 0x001;

/// Environment Call (ECALL), full encoding.
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (EBREAK), full encoding.
pub const EBREAK: u32 = 0x0010_0073;
