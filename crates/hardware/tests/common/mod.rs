//! Shared test infrastructure.

/// Instruction encoders.
pub mod builder;


/// Mock bus devices.
pub mod mocks;

pub use builder::instruction::InstructionBuilder;
pub use harness::TestContext;
