//! RISC-V Atomic Extension (A) Opcodes.

/// Atomic Memory Operation opcode (0b0101111).
/// Used for all AMO instructions (LR, SC, AMOADD, etc.).
pub const OP_AMO: u32 = 0b0101111;

/// Bit of funct7 holding the acquire ordering flag.
pub const AQ_BIT: u32 = 1 << 1;

/// Bit of funct7 holding the release ordering flag.
pub const RL_BIT: u32 = 1 << 0;
