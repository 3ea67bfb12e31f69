//! # Application Services
//!
//! * [`greeter::GreeterService`]: Composes a greeting and emits it.
//! * [`calculator::CalculatorService`]: Runs additions on an owned accumulator.

pub mod calculator;
pub mod greeter;
