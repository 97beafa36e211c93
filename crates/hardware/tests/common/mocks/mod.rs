//! Mock devices.

/// `mockall` implementation of the `Device` trait.
pub mod bus;
