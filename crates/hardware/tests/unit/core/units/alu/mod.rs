pub mod arithmetic;
pub mod logic;
