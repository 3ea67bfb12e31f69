//! # Ports Layer (Boundaries)
//!
//! Interfaces that isolate the application from the infrastructure.
//!
//! ## Dependency Rule
//! * The Application depends on these Ports.
//! * The Adapters implement these Ports.

pub mod outbound;
