//! Instruction disassembler.
//!
//! Renders a 32-bit encoding as assembly text for instruction traces and
//! test diagnostics. The instruction is identified through the same
//! [`DecodeTable`] the dispatcher uses, so the text always names the
//! instruction that would actually execute.
//!
//! ```
//! use rv64emu_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x02A5_0513), "addi a0, a0, 42");
//! assert_eq!(disassemble(0x0000_0000), "unknown");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::Instruction;
use crate::isa::op::OperandForm;
use crate::isa::table::DecodeTable;

/// Disassembles `raw` into a mnemonic and operands, or `"unknown"` for an
/// encoding the table rejects.
pub fn disassemble(raw: u32) -> String {
    let inst = Instruction::new(raw);
    if inst.is_compressed() {
        return "unknown".to_owned();
    }
    let Ok(entry) = DecodeTable::global().lookup(raw) else {
        return "unknown".to_owned();
    };

    let mn = entry.op.mnemonic();
    let rd = reg_name(inst.rd());
    let rs1 = reg_name(inst.rs1());
    let rs2 = reg_name(inst.rs2());

    match entry.op.form() {
        OperandForm::Register => format!("{mn} {rd}, {rs1}, {rs2}"),
        OperandForm::Immediate => format!("{mn} {rd}, {rs1}, {}", inst.imm_i()),
        OperandForm::Shift => format!("{mn} {rd}, {rs1}, {}", inst.shamt()),
        OperandForm::Load => format!("{mn} {rd}, {}({rs1})", inst.imm_i()),
        OperandForm::Store => format!("{mn} {rs2}, {}({rs1})", inst.imm_s()),
        OperandForm::Branch => format!("{mn} {rs1}, {rs2}, {}", inst.imm_b()),
        OperandForm::Upper => format!("{mn} {rd}, {:#x}", (raw >> 12) & 0xF_FFFF),
        OperandForm::Jump => format!("{mn} {rd}, {}", inst.imm_j()),
        OperandForm::LoadReserved => format!("{mn} {rd}, ({rs1})"),
        OperandForm::Amo => format!("{mn} {rd}, {rs2}, ({rs1})"),
        OperandForm::None => mn.to_owned(),
    }
}
