//! # Domain Layer (Core)
//!
//! ## Characteristics
//! * **Pure Rust**: No IO, no logging sinks, no system calls.
//! * **Independence**: Does not know about Ports, Adapters, or the Application layer.
//!
//! ## Contents
//! * [`greeting`]: Builds the greeting message.
//! * [`accumulator::Accumulator`]: Holds the result of the latest addition.
//! * [`operand::Operand`]: A validated number parsed from user input.

pub mod accumulator;
pub mod greeting;
pub mod operand;
