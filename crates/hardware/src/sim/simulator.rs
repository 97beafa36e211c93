//! Simulator: owns the CPU and drives it until the guest stops.

use std::path::Path;

use tracing::info;

use crate::common::constants::SYSCALL_EXIT;
use crate::common::{SimError, Trap};
use crate::config::Config;
use crate::core::{Cpu, Retired};
use crate::isa::abi;
use crate::sim::loader;
use crate::soc::System;

/// How a call to [`Simulator::run`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The guest requested exit, through SysCon or the exit system call.
    Exited(u64),
    /// A trap the run loop does not handle.
    Trapped {
        /// The trap.
        trap: Trap,
        /// PC of the instruction that raised it.
        pc: u64,
    },
    /// `general.max_instructions` instructions retired without an exit.
    StepLimit,
}

/// Top-level simulator: CPU state plus the configuration it was built from.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, reservations, bus, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Builds the system described by `config` and a CPU attached to it.
    ///
    /// # Errors
    ///
    /// Propagates `System::new` failures.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let system = System::new(config)?;
        Ok(Self::with_system(system, config))
    }

    /// Creates a simulator around an already built system.
    pub fn with_system(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
            config: config.clone(),
        }
    }

    /// The configuration this simulator was created with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the image at `path` and points the PC at its entry.
    ///
    /// # Errors
    ///
    /// I/O, ELF, and range errors from the loader.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<u64, SimError> {
        let image = loader::read_image(path)?;
        self.load_bytes(&image)
    }

    /// Loads an in-memory image and points the PC at its entry.
    ///
    /// `general.start_pc`, when set, overrides the image entry.
    ///
    /// # Errors
    ///
    /// ELF and range errors from the loader.
    pub fn load_bytes(&mut self, image: &[u8]) -> Result<u64, SimError> {
        let entry = loader::load_image(&mut self.cpu.bus, image, &self.config.system)?;
        self.cpu.pc = self.config.general.start_pc.unwrap_or(entry);
        Ok(entry)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// The trap raised by the instruction, if any.
    pub fn step(&mut self) -> Result<Retired, Trap> {
        self.cpu.step()
    }

    /// Runs until the guest exits, an unhandled trap is raised, or the
    /// configured instruction limit is reached.
    pub fn run(&mut self) -> RunOutcome {
        let limit = self.config.general.max_instructions;
        let mut retired: u64 = 0;

        let outcome = loop {
            if let Some(code) = self.cpu.bus.check_exit() {
                break RunOutcome::Exited(code);
            }
            if limit.is_some_and(|max| retired >= max) {
                break RunOutcome::StepLimit;
            }
            match self.cpu.step() {
                Ok(_) => retired += 1,
                Err(Trap::EnvironmentCall(_))
                    if self.cpu.regs.read(abi::REG_A7) == SYSCALL_EXIT =>
                {
                    break RunOutcome::Exited(self.cpu.regs.read(abi::REG_A0));
                }
                Err(trap) => {
                    break RunOutcome::Trapped {
                        trap,
                        pc: self.cpu.pc,
                    };
                }
            }
        };

        info!(
            retired = self.cpu.stats.instructions_retired,
            "simulation stopped: {outcome:?}"
        );
        outcome
    }
}
