//! Execution statistics collection and reporting.
//!
//! This module tracks what the interpreter did during a run. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch, jump, atomic, system).
//! 3. **Control flow:** Taken conditional branches.
//! 4. **Atomics:** Store-conditional successes and failures.
//! 5. **Traps:** Faults raised by fetch, decode, or execution.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::isa::op::InstClass;

/// Retired instruction counts by class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InstructionMix {
    /// Integer arithmetic, logic, shifts, compares, upper immediates, RV64M.
    pub alu: u64,
    /// Loads.
    pub load: u64,
    /// Stores.
    pub store: u64,
    /// Conditional branches, taken or not.
    pub branch: u64,
    /// JAL and JALR.
    pub jump: u64,
    /// LR, SC, and AMOs.
    pub atomic: u64,
    /// FENCE, FENCE.I, ECALL, EBREAK.
    pub system: u64,
}

/// Statistics for one run.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions retired.
    pub instructions_retired: u64,
    /// Retired instructions by class.
    pub mix: InstructionMix,
    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// Store-conditionals that found their reservation and wrote memory.
    pub sc_success: u64,
    /// Store-conditionals that failed.
    pub sc_failure: u64,
    /// Traps raised (the trapping instruction does not retire).
    pub traps: u64,
}

/// Serialized form: the counters plus host timing.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    stats: &'a SimStats,
    host_seconds: f64,
    mips: f64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            mix: InstructionMix::default(),
            branches_taken: 0,
            sc_success: 0,
            sc_failure: 0,
            traps: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of class `class`.
    ///
    /// `taken` is only meaningful for conditional branches.
    pub const fn record_retired(&mut self, class: InstClass, taken: bool) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.mix.alu += 1,
            InstClass::Load => self.mix.load += 1,
            InstClass::Store => self.mix.store += 1,
            InstClass::Branch => {
                self.mix.branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            InstClass::Jump => self.mix.jump += 1,
            InstClass::Atomic => self.mix.atomic += 1,
            InstClass::System => self.mix.system += 1,
        }
    }

    /// Records the outcome of a store-conditional.
    pub const fn record_sc(&mut self, success: bool) {
        if success {
            self.sc_success += 1;
        } else {
            self.sc_failure += 1;
        }
    }

    /// Records a raised trap.
    pub const fn record_trap(&mut self) {
        self.traps += 1;
    }

    /// Host time since these statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Millions of retired instructions per host second.
    pub fn mips(&self) -> f64 {
        let seconds = self.elapsed().as_secs_f64();
        if seconds > 0.0 {
            self.instructions_retired as f64 / seconds / 1_000_000.0
        } else {
            0.0
        }
    }

    /// Renders the statistics, including host timing, as pretty JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures from `serde_json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Report {
            stats: self,
            host_seconds: self.elapsed().as_secs_f64(),
            mips: self.mips(),
        })
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.mix;
        writeln!(f, "host_seconds             {:.4} s", self.elapsed().as_secs_f64())?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_mips                 {:.2}", self.mips())?;
        writeln!(f, "mix.alu                  {}", m.alu)?;
        writeln!(f, "mix.load                 {}", m.load)?;
        writeln!(f, "mix.store                {}", m.store)?;
        writeln!(f, "mix.branch               {} ({} taken)", m.branch, self.branches_taken)?;
        writeln!(f, "mix.jump                 {}", m.jump)?;
        writeln!(f, "mix.atomic               {}", m.atomic)?;
        writeln!(f, "mix.system               {}", m.system)?;
        writeln!(f, "sc.success               {}", self.sc_success)?;
        writeln!(f, "sc.failure               {}", self.sc_failure)?;
        write!(f, "traps                    {}", self.traps)
    }
}
