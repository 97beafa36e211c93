//! Configuration for the emulator.
//!
//! This module defines the configuration structures used to parameterize
//! a run. It provides:
//! 1. **Defaults:** The baseline memory map (RAM, UART, SysCon) and run limits.
//! 2. **Structures:** `GeneralConfig` for run control and `SystemConfig` for the SoC.
//! 3. **Policy:** `UnmappedAccess`, deciding what the bus does with accesses no device claims.
//!
//! Every field has a default, so an empty JSON object is a valid configuration
//! and `Config::default()` is what the CLI uses without `--config`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the emulator.
mod defaults {
    /// Base address of main system RAM (2 GiB).
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of main system RAM (128 MiB).
    pub const RAM_SIZE: u64 = 128 * 1024 * 1024;

    /// Base address of UART 16550-compatible serial port MMIO region.
    pub const UART_BASE: u64 = 0x1000_0000;

    /// Base address of system controller (power/reset) MMIO region.
    pub const SYSCON_BASE: u64 = 0x0010_0000;
}

/// What the bus does with an access that no device window contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnmappedAccess {
    /// Reads return 0 and writes are dropped; a warning is logged.
    #[default]
    Ignore,
    /// The access fails and the instruction raises the matching access fault.
    Fault,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv64emu_core::config::{Config, UnmappedAccess};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_instructions": 1000 },
///     "system": { "ram_size": 1048576, "unmapped_access": "Fault" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_instructions, Some(1000));
/// assert_eq!(config.system.ram_base, 0x8000_0000);
/// assert_eq!(config.system.unmapped_access, UnmappedAccess::Fault);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// System memory map and bus policy
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the JSON is malformed or has mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read, or `SimError::Config`
    /// if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC; overrides the entry point found in the loaded image.
    #[serde(default)]
    pub start_pc: Option<u64>,

    /// Initial stack pointer. Defaults to the top of RAM.
    #[serde(default)]
    pub initial_sp: Option<u64>,

    /// Stop `Simulator::run` after this many retired instructions.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// System memory map and bus policy.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// RAM base address
    #[serde(default = "SystemConfig::default_ram_base")]
    pub ram_base: u64,

    /// RAM size in bytes
    #[serde(default = "SystemConfig::default_ram_size")]
    pub ram_size: u64,

    /// UART MMIO base address
    #[serde(default = "SystemConfig::default_uart_base")]
    pub uart_base: u64,

    /// System controller MMIO base address
    #[serde(default = "SystemConfig::default_syscon_base")]
    pub syscon_base: u64,

    /// Behaviour of accesses outside every device window
    #[serde(default)]
    pub unmapped_access: UnmappedAccess,
}

impl SystemConfig {
    const fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    const fn default_ram_size() -> u64 {
        defaults::RAM_SIZE
    }

    const fn default_uart_base() -> u64 {
        defaults::UART_BASE
    }

    const fn default_syscon_base() -> u64 {
        defaults::SYSCON_BASE
    }

    /// One past the last RAM address.
    pub const fn ram_end(&self) -> u64 {
        self.ram_base.saturating_add(self.ram_size)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            uart_base: defaults::UART_BASE,
            syscon_base: defaults::SYSCON_BASE,
            unmapped_access: UnmappedAccess::default(),
        }
    }
}
