//! Instruction classification table.
//!
//! Decoding is a walk down at most three levels, each a plain table lookup:
//!
//! 1. the major opcode selects a [`Route`]: either a leaf (LUI, AUIPC, JAL)
//!    or a family of eight `funct3` slots;
//! 2. the `funct3` slot is a leaf, illegal, or a [`Slot::Split`];
//! 3. a split compares one more field (`funct7`, `funct6`, `funct5` or
//!    `funct12`, see [`Discriminant`]) against its arms.
//!
//! A miss at any level yields `Trap::IllegalInstruction` carrying the raw
//! word, so every encoding maps either to exactly one [`Entry`] or to an
//! illegal-instruction trap. The table is built once per process.

use std::sync::LazyLock;

use crate::common::Trap;
use crate::core::semantics::{self, Handler, atomic, control, integer, muldiv, system};
use crate::core::units::alu::{Double, OperandWidth, Word};
use crate::isa::instruction::InstructionBits;
use crate::isa::op::Op;
use crate::isa::privileged::opcodes as sys;
use crate::isa::rv64a::{funct3 as a_f3, funct5, opcodes as a_op};
use crate::isa::rv64i::{funct3 as f3, funct7 as f7, opcodes as op};
use crate::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

/// Number of distinct major opcodes (7-bit field).
const OPCODE_COUNT: usize = 128;

/// Number of `funct3` slots in a family.
const FUNCT3_COUNT: usize = 8;

/// A resolved instruction: its identity and the handler that executes it.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// Instruction identity.
    pub op: Op,
    /// Semantic handler.
    pub handler: Handler,
}

/// The field a [`Slot::Split`] compares against its arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discriminant {
    /// Bits 31-25: ADD/SUB/MUL, SRL/SRA/DIVU, and the 32-bit shift-immediates.
    Funct7,
    /// Bits 31-26: RV64 shift-immediates, whose bit 25 is part of `shamt`.
    Funct6,
    /// Bits 31-27: AMO operation; bits 26-25 (`aq`/`rl`) are ignored.
    Funct5,
    /// Bits 31-20: ECALL / EBREAK.
    Funct12,
}

impl Discriminant {
    /// Extracts this field from `raw`.
    #[inline(always)]
    pub fn extract(self, raw: u32) -> u32 {
        match self {
            Self::Funct7 => raw.funct7(),
            Self::Funct6 => raw.funct6(),
            Self::Funct5 => raw.funct5(),
            Self::Funct12 => raw.funct12(),
        }
    }
}

/// One `funct3` slot of a family.
#[derive(Clone, Debug)]
pub enum Slot {
    /// No instruction uses this `funct3`.
    Illegal,
    /// `funct3` alone identifies the instruction.
    Leaf(Entry),
    /// Further disambiguated by `on`; unmatched values are illegal.
    Split {
        /// Field compared against the arms.
        on: Discriminant,
        /// `(field value, entry)` pairs.
        arms: Vec<(u32, Entry)>,
    },
}

/// What a major opcode resolves to.
#[derive(Clone, Debug)]
pub enum Route {
    /// The opcode alone identifies the instruction.
    Leaf(Entry),
    /// Eight `funct3` slots.
    Family(Box<[Slot; FUNCT3_COUNT]>),
}

/// The complete opcode → entry classification.
#[derive(Debug)]
pub struct DecodeTable {
    routes: Vec<Option<Route>>,
}

static DECODE_TABLE: LazyLock<DecodeTable> = LazyLock::new(DecodeTable::build);

const fn entry(op: Op, handler: Handler) -> Entry {
    Entry { op, handler }
}

/// Builds a family from `(funct3, slot)` pairs; unlisted slots are illegal.
fn family<const N: usize>(slots: [(u32, Slot); N]) -> Route {
    let mut table: [Slot; FUNCT3_COUNT] = std::array::from_fn(|_| Slot::Illegal);
    for (funct3, slot) in slots {
        table[funct3 as usize] = slot;
    }
    Route::Family(Box::new(table))
}

fn leaf(op: Op, handler: Handler) -> Slot {
    Slot::Leaf(entry(op, handler))
}

fn split<const N: usize>(on: Discriminant, arms: [(u32, Op, Handler); N]) -> Slot {
    Slot::Split {
        on,
        arms: arms
            .into_iter()
            .map(|(value, op, handler)| (value, entry(op, handler)))
            .collect(),
    }
}

/// The `funct5` split of one AMO width. `ops` lists the identities in the
/// order `lr, sc, swap, add, xor, and, or, min, max, minu, maxu`.
fn atomic_slot<W: OperandWidth>(ops: [Op; 11]) -> Slot {
    let [lr, sc, swap, add, xor, and, or, min, max, minu, maxu] = ops;
    split(
        Discriminant::Funct5,
        [
            (funct5::LR, lr, atomic::lr::<W>),
            (funct5::SC, sc, atomic::sc::<W>),
            (funct5::AMOSWAP, swap, atomic::amo::<W, { funct5::AMOSWAP }>),
            (funct5::AMOADD, add, atomic::amo::<W, { funct5::AMOADD }>),
            (funct5::AMOXOR, xor, atomic::amo::<W, { funct5::AMOXOR }>),
            (funct5::AMOAND, and, atomic::amo::<W, { funct5::AMOAND }>),
            (funct5::AMOOR, or, atomic::amo::<W, { funct5::AMOOR }>),
            (funct5::AMOMIN, min, atomic::amo::<W, { funct5::AMOMIN }>),
            (funct5::AMOMAX, max, atomic::amo::<W, { funct5::AMOMAX }>),
            (funct5::AMOMINU, minu, atomic::amo::<W, { funct5::AMOMINU }>),
            (funct5::AMOMAXU, maxu, atomic::amo::<W, { funct5::AMOMAXU }>),
        ],
    )
}

impl DecodeTable {
    /// Returns the process-wide table, building it on first use.
    pub fn global() -> &'static Self {
        &DECODE_TABLE
    }

    /// Resolves `raw` to its entry.
    ///
    /// # Errors
    ///
    /// `Trap::IllegalInstruction(raw)` if any level of the walk misses.
    pub fn lookup(&self, raw: u32) -> Result<Entry, Trap> {
        let illegal = Trap::IllegalInstruction(raw);
        let route = self.routes[raw.opcode() as usize]
            .as_ref()
            .ok_or_else(|| illegal.clone())?;
        let slots = match route {
            Route::Leaf(entry) => return Ok(*entry),
            Route::Family(slots) => slots,
        };
        match &slots[raw.funct3() as usize] {
            Slot::Illegal => Err(illegal),
            Slot::Leaf(entry) => Ok(*entry),
            Slot::Split { on, arms } => {
                let key = on.extract(raw);
                arms.iter()
                    .find(|(value, _)| *value == key)
                    .map(|(_, entry)| *entry)
                    .ok_or(illegal)
            }
        }
    }

    /// Number of distinct entries in the table.
    pub fn len(&self) -> usize {
        self.routes
            .iter()
            .flatten()
            .map(|route| match route {
                Route::Leaf(_) => 1,
                Route::Family(slots) => slots
                    .iter()
                    .map(|slot| match slot {
                        Slot::Illegal => 0,
                        Slot::Leaf(_) => 1,
                        Slot::Split { arms, .. } => arms.len(),
                    })
                    .sum(),
            })
            .sum()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build() -> Self {
        use Discriminant::{Funct6, Funct7, Funct12};

        let mut routes: Vec<Option<Route>> = (0..OPCODE_COUNT).map(|_| None).collect();
        let mut set = |opcode: u32, route: Route| routes[opcode as usize] = Some(route);

        set(op::OP_LUI, Route::Leaf(entry(Op::Lui, control::lui)));
        set(op::OP_AUIPC, Route::Leaf(entry(Op::Auipc, control::auipc)));
        set(op::OP_JAL, Route::Leaf(entry(Op::Jal, control::jal)));
        set(op::OP_JALR, family([(f3::JALR, leaf(Op::Jalr, control::jalr))]));

        set(
            op::OP_BRANCH,
            family([
                (f3::BEQ, leaf(Op::Beq, control::beq)),
                (f3::BNE, leaf(Op::Bne, control::bne)),
                (f3::BLT, leaf(Op::Blt, control::blt)),
                (f3::BGE, leaf(Op::Bge, control::bge)),
                (f3::BLTU, leaf(Op::Bltu, control::bltu)),
                (f3::BGEU, leaf(Op::Bgeu, control::bgeu)),
            ]),
        );

        set(
            op::OP_LOAD,
            family([
                (f3::LB, leaf(Op::Lb, semantics::memory::lb)),
                (f3::LH, leaf(Op::Lh, semantics::memory::lh)),
                (f3::LW, leaf(Op::Lw, semantics::memory::lw)),
                (f3::LD, leaf(Op::Ld, semantics::memory::ld)),
                (f3::LBU, leaf(Op::Lbu, semantics::memory::lbu)),
                (f3::LHU, leaf(Op::Lhu, semantics::memory::lhu)),
                (f3::LWU, leaf(Op::Lwu, semantics::memory::lwu)),
            ]),
        );

        set(
            op::OP_STORE,
            family([
                (f3::SB, leaf(Op::Sb, semantics::memory::sb)),
                (f3::SH, leaf(Op::Sh, semantics::memory::sh)),
                (f3::SW, leaf(Op::Sw, semantics::memory::sw)),
                (f3::SD, leaf(Op::Sd, semantics::memory::sd)),
            ]),
        );

        set(
            op::OP_IMM,
            family([
                (f3::ADD_SUB, leaf(Op::Addi, integer::addi)),
                (f3::SLT, leaf(Op::Slti, integer::slti)),
                (f3::SLTU, leaf(Op::Sltiu, integer::sltiu)),
                (f3::XOR, leaf(Op::Xori, integer::xori)),
                (f3::OR, leaf(Op::Ori, integer::ori)),
                (f3::AND, leaf(Op::Andi, integer::andi)),
                (
                    f3::SLL,
                    split(Funct6, [(f7::SHIFT_LOGICAL_6, Op::Slli, integer::slli)]),
                ),
                (
                    f3::SRL_SRA,
                    split(
                        Funct6,
                        [
                            (f7::SHIFT_LOGICAL_6, Op::Srli, integer::srli),
                            (f7::SHIFT_ARITH_6, Op::Srai, integer::srai),
                        ],
                    ),
                ),
            ]),
        );

        set(
            op::OP_IMM_32,
            family([
                (f3::ADD_SUB, leaf(Op::Addiw, integer::addiw)),
                (
                    f3::SLL,
                    split(Funct7, [(f7::DEFAULT, Op::Slliw, integer::slliw)]),
                ),
                (
                    f3::SRL_SRA,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Srliw, integer::srliw),
                            (f7::SRA, Op::Sraiw, integer::sraiw),
                        ],
                    ),
                ),
            ]),
        );

        set(
            op::OP_REG,
            family([
                (
                    f3::ADD_SUB,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Add, integer::add),
                            (f7::SUB, Op::Sub, integer::sub),
                            (m_op::M_EXTENSION, Op::Mul, muldiv::mul),
                        ],
                    ),
                ),
                (
                    f3::SLL,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Sll, integer::sll),
                            (m_op::M_EXTENSION, Op::Mulh, muldiv::mulh),
                        ],
                    ),
                ),
                (
                    f3::SLT,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Slt, integer::slt),
                            (m_op::M_EXTENSION, Op::Mulhsu, muldiv::mulhsu),
                        ],
                    ),
                ),
                (
                    f3::SLTU,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Sltu, integer::sltu),
                            (m_op::M_EXTENSION, Op::Mulhu, muldiv::mulhu),
                        ],
                    ),
                ),
                (
                    f3::XOR,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Xor, integer::xor),
                            (m_op::M_EXTENSION, Op::Div, muldiv::div),
                        ],
                    ),
                ),
                (
                    f3::SRL_SRA,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Srl, integer::srl),
                            (f7::SRA, Op::Sra, integer::sra),
                            (m_op::M_EXTENSION, Op::Divu, muldiv::divu),
                        ],
                    ),
                ),
                (
                    f3::OR,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Or, integer::or),
                            (m_op::M_EXTENSION, Op::Rem, muldiv::rem),
                        ],
                    ),
                ),
                (
                    f3::AND,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::And, integer::and),
                            (m_op::M_EXTENSION, Op::Remu, muldiv::remu),
                        ],
                    ),
                ),
            ]),
        );

        set(
            op::OP_REG_32,
            family([
                (
                    f3::ADD_SUB,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Addw, integer::addw),
                            (f7::SUB, Op::Subw, integer::subw),
                            (m_op::M_EXTENSION, Op::Mulw, muldiv::mulw),
                        ],
                    ),
                ),
                (
                    f3::SLL,
                    split(Funct7, [(f7::DEFAULT, Op::Sllw, integer::sllw)]),
                ),
                (
                    m_f3::DIV,
                    split(Funct7, [(m_op::M_EXTENSION, Op::Divw, muldiv::divw)]),
                ),
                (
                    f3::SRL_SRA,
                    split(
                        Funct7,
                        [
                            (f7::DEFAULT, Op::Srlw, integer::srlw),
                            (f7::SRA, Op::Sraw, integer::sraw),
                            (m_op::M_EXTENSION, Op::Divuw, muldiv::divuw),
                        ],
                    ),
                ),
                (
                    m_f3::REM,
                    split(Funct7, [(m_op::M_EXTENSION, Op::Remw, muldiv::remw)]),
                ),
                (
                    m_f3::REMU,
                    split(Funct7, [(m_op::M_EXTENSION, Op::Remuw, muldiv::remuw)]),
                ),
            ]),
        );

        set(
            a_op::OP_AMO,
            family([
                (
                    a_f3::WIDTH_32,
                    atomic_slot::<Word>([
                        Op::LrW,
                        Op::ScW,
                        Op::AmoswapW,
                        Op::AmoaddW,
                        Op::AmoxorW,
                        Op::AmoandW,
                        Op::AmoorW,
                        Op::AmominW,
                        Op::AmomaxW,
                        Op::AmominuW,
                        Op::AmomaxuW,
                    ]),
                ),
                (
                    a_f3::WIDTH_64,
                    atomic_slot::<Double>([
                        Op::LrD,
                        Op::ScD,
                        Op::AmoswapD,
                        Op::AmoaddD,
                        Op::AmoxorD,
                        Op::AmoandD,
                        Op::AmoorD,
                        Op::AmominD,
                        Op::AmomaxD,
                        Op::AmominuD,
                        Op::AmomaxuD,
                    ]),
                ),
            ]),
        );

        set(
            op::OP_MISC_MEM,
            family([
                (f3::FENCE, leaf(Op::Fence, system::fence)),
                (f3::FENCE_I, leaf(Op::FenceI, system::fence_i)),
            ]),
        );

        set(
            sys::OP_SYSTEM,
            family([(
                sys::PRIV,
                split(
                    Funct12,
                    [
                        (sys::FUNCT12_ECALL, Op::Ecall, system::ecall),
                        (sys::FUNCT12_EBREAK, Op::Ebreak, system::ebreak),
                    ],
                ),
            )]),
        );

        Self { routes }
    }
}
