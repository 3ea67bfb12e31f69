//! # Application Layer (Service Layer)
//!
//! Each service:
//! 1. Receives a request from an inbound adapter (the CLI).
//! 2. Runs the domain logic.
//! 3. Reports through an outbound port when the use case has output.
//! 4. Returns the result to the caller.

pub mod services;
