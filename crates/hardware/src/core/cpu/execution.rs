//! Main Execution Step.
//!
//! This module implements one fetch-decode-execute step of the hart:
//! 1. **Fetch:** Reads the word at the PC.
//! 2. **Dispatch:** Routes 16-bit encodings to `execute16` and 32-bit ones to
//!    `execute32`, which resolves the handler through the decode table.
//! 3. **Commit:** Installs the next PC the handler returned and records statistics.
//! 4. **Observability:** Emits a disassembled trace line per retired instruction.
//!
//! A trap leaves the PC at the faulting instruction, drops the reservation,
//! and is handed back to the caller.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::Trap;
use crate::common::constants::{COMPRESSED_INSTRUCTION_MASK, STANDARD_INSTRUCTION_VALUE};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::isa::op::{InstClass, Op};
use crate::isa::table::DecodeTable;

/// Mask selecting a 16-bit parcel.
const PARCEL_MASK: u32 = 0xFFFF;

/// Summary of one retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: u64,
    /// The instruction word.
    pub inst: Instruction,
    /// What it decoded to.
    pub op: Op,
    /// PC committed after it.
    pub next_pc: u64,
}

impl Cpu {
    /// Fetches, decodes and executes the instruction at the PC.
    ///
    /// # Errors
    ///
    /// Any trap raised by fetch, decode, or the handler. The PC and registers
    /// are left as they were before the step.
    pub fn step(&mut self) -> Result<Retired, Trap> {
        let pc = self.pc;
        match self.fetch(pc).and_then(|raw| self.execute(Instruction::new(raw))) {
            Ok((op, inst, next_pc)) => {
                self.pc = next_pc;
                let taken = op.class() == InstClass::Branch
                    && next_pc != pc.wrapping_add(inst.length());
                self.stats.record_retired(op.class(), taken);
                if self.trace {
                    trace!("{pc:#018x}: {:08x}  {}", inst.raw(), disassemble(inst.raw()));
                }
                Ok(Retired {
                    pc,
                    inst,
                    op,
                    next_pc,
                })
            }
            Err(trap) => {
                self.reservations.clear();
                self.stats.record_trap();
                debug!(cause = trap.cause(), tval = trap.tval(), "trap at {pc:#x}: {trap}");
                Err(trap)
            }
        }
    }

    /// Dispatches on the encoding length.
    fn execute(&mut self, inst: Instruction) -> Result<(Op, Instruction, u64), Trap> {
        if inst.raw() & COMPRESSED_INSTRUCTION_MASK == STANDARD_INSTRUCTION_VALUE {
            let (op, next_pc) = self.execute32(inst)?;
            Ok((op, inst, next_pc))
        } else {
            Err(Self::execute16(inst))
        }
    }

    /// Compressed instructions are not implemented; every 16-bit parcel is
    /// illegal.
    const fn execute16(inst: Instruction) -> Trap {
        Trap::IllegalInstruction(inst.raw() & PARCEL_MASK)
    }

    /// Resolves `inst` through the decode table and runs its handler.
    ///
    /// Returns the executed op and the PC the handler selected.
    pub fn execute32(&mut self, inst: Instruction) -> Result<(Op, u64), Trap> {
        let entry = DecodeTable::global().lookup(inst.raw())?;
        let next_pc = (entry.handler)(self, inst)?;
        Ok((entry.op, next_pc))
    }
}
