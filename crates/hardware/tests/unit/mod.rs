//! # Unit Components
//!
//! Unit tests organized like the library: shared types, configuration, the
//! CPU core, the ISA tables, the SoC, the loader and run loop, and statistics.


/// JSON configuration parsing and defaults.
pub mod config;
